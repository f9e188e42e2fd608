use super::constants::*;
use super::types::{DiscoverySettings, GeminiSettings};

pub fn default_user_agent() -> String {
    format!("stride/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_MODEL_CACHE_TTL_SECS,
        }
    }
}
