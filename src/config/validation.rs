use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.gemini.api_key.trim().is_empty() {
        Err(anyhow!(
            "Gemini API key not found. Set GEMINI_API_KEY or add it to {}",
            Config::config_path()?.display()
        ))
    } else {
        Ok(())
    }
}
