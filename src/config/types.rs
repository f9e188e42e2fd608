use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiSettings,
    pub discovery: DiscoverySettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    pub cache_ttl_secs: u64,
}

// File configuration shapes; every field optional so a partial file works.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub gemini: FileGeminiSettings,
    #[serde(default)]
    pub discovery: FileDiscoverySettings,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileGeminiSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub default_model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileDiscoverySettings {
    pub cache_ttl_secs: Option<u64>,
}
