use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string("GEMINI_API_KEY")? {
        builder = builder.with_gemini(|gemini| gemini.api_key = api_key.clone());
    }

    if let Some(base_url) = env_string("STRIDE_BASE_URL")? {
        builder = builder.with_gemini(|gemini| gemini.base_url = base_url.clone());
    }

    if let Some(model) = env_string("STRIDE_MODEL")? {
        builder = builder.with_gemini(|gemini| gemini.default_model = model.clone());
    }

    if let Some(timeout) = env_u64("STRIDE_TIMEOUT_SECS")? {
        builder = builder.with_gemini(|gemini| gemini.timeout_secs = timeout);
    }

    if let Some(ttl) = env_u64("STRIDE_MODEL_CACHE_TTL_SECS")? {
        builder = builder.with_discovery(|discovery| discovery.cache_ttl_secs = ttl);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
