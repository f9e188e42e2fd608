use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::FileConfig;
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".stride/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;

        let config = builder.build()?;
        validate(&config)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    pub(super) fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub(super) fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        builder
            .with_gemini(|gemini| {
                if let Some(api_key) = self.gemini.api_key.clone() {
                    gemini.api_key = api_key;
                }
                if let Some(base_url) = self.gemini.base_url.clone() {
                    gemini.base_url = base_url;
                }
                if let Some(model) = self.gemini.default_model.clone() {
                    gemini.default_model = model;
                }
                if let Some(timeout) = self.gemini.timeout_secs {
                    gemini.timeout_secs = timeout;
                }
                if let Some(user_agent) = self.gemini.user_agent.clone() {
                    gemini.user_agent = user_agent;
                }
            })
            .with_discovery(|discovery| {
                if let Some(ttl) = self.discovery.cache_ttl_secs {
                    discovery.cache_ttl_secs = ttl;
                }
            })
    }
}
