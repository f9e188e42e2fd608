//! Time-cached discovery of generation-capable models.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use crate::client::GeminiClient;
use crate::error::ApiError;

/// Generation method a model must support to be usable for plan text.
const GENERATE_CAPABILITY: &str = "generateContent";

/// Provider namespace prefix stripped from model names.
const MODEL_NAME_PREFIX: &str = "models/";

#[derive(Debug, Clone)]
struct ModelSnapshot {
    models: Vec<String>,
    fetched_at: Instant,
}

/// Single-slot cache over the provider's model listing.
///
/// The whole check-then-refresh-then-store sequence runs under one guard, so
/// concurrent callers during a refresh wait for the single shared result
/// instead of issuing duplicate listing calls. A listing failure propagates;
/// an expired snapshot is never served as a fallback.
pub struct ModelCatalog {
    client: GeminiClient,
    ttl: Duration,
    snapshot: Mutex<Option<ModelSnapshot>>,
}

impl ModelCatalog {
    pub fn new(client: GeminiClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            snapshot: Mutex::new(None),
        }
    }

    /// Returns the model identifiers currently capable of text generation,
    /// namespace prefix stripped, insertion order preserved.
    pub async fn list_models(&self) -> Result<Vec<String>, ApiError> {
        let mut slot = self.snapshot.lock().await;

        if let Some(snapshot) = slot.as_ref() {
            if snapshot.fetched_at.elapsed() < self.ttl {
                return Ok(snapshot.models.clone());
            }
        }

        let models: Vec<String> = self
            .client
            .list_models()
            .await?
            .into_iter()
            .filter(|descriptor| {
                descriptor
                    .supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_CAPABILITY)
            })
            .map(|descriptor| {
                descriptor
                    .name
                    .strip_prefix(MODEL_NAME_PREFIX)
                    .unwrap_or(&descriptor.name)
                    .to_string()
            })
            .collect();

        debug!(count = models.len(), "refreshed model snapshot");
        *slot = Some(ModelSnapshot {
            models: models.clone(),
            fetched_at: Instant::now(),
        });

        Ok(models)
    }
}
