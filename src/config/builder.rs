use anyhow::Result;

use super::types::{Config, DiscoverySettings, GeminiSettings};

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    pub(super) gemini: GeminiSettings,
    pub(super) discovery: DiscoverySettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gemini<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut GeminiSettings),
    {
        update(&mut self.gemini);
        self
    }

    pub fn with_discovery<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut DiscoverySettings),
    {
        update(&mut self.discovery);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            gemini: self.gemini,
            discovery: self.discovery,
        })
    }
}
