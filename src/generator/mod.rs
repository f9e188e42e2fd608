//! Completion client with per-candidate fallback.

mod parsing;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{GeminiClient, GenerationConfig};
use crate::discovery::ModelCatalog;
use crate::error::{ApiError, GeneratorError};

use parsing::extract_json_payload;

/// Last-resort candidates used when discovery fails or yields nothing.
pub const FALLBACK_MODELS: [&str; 3] = [
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro-latest",
    "gemini-pro",
];

/// At most this many discovered models join the candidate list.
const DISCOVERED_CANDIDATE_LIMIT: usize = 3;

/// Fixed decoding parameters for every generation call.
const GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    top_k: 40,
    top_p: 0.95,
    max_output_tokens: 2048,
};

/// Issues a generation request against an ordered candidate list and
/// extracts the JSON payload from the winning response.
///
/// Each candidate gets exactly one attempt; a timeout, a non-success status,
/// or a response without a text part advances to the next candidate. Either
/// one full text blob comes back or the whole operation fails with an
/// exhaustion error.
pub struct PlanGenerator {
    client: GeminiClient,
    catalog: Arc<ModelCatalog>,
    default_model: String,
}

impl PlanGenerator {
    pub fn new(client: GeminiClient, catalog: Arc<ModelCatalog>, default_model: String) -> Self {
        Self {
            client,
            catalog,
            default_model,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let discovered = match self.catalog.list_models().await {
            Ok(models) => models,
            Err(error) => {
                warn!(%error, "model discovery failed, falling back to fixed candidates");
                Vec::new()
            }
        };

        let candidates = candidate_models(&self.default_model, &discovered);
        for model in &candidates {
            match self.try_candidate(model, prompt).await {
                Ok(text) => {
                    debug!(%model, "candidate produced a completion");
                    return Ok(extract_json_payload(&text));
                }
                Err(error) => {
                    warn!(%model, %error, "candidate failed, advancing to next");
                }
            }
        }

        Err(GeneratorError::Exhausted {
            attempted: candidates,
        })
    }

    async fn try_candidate(&self, model: &str, prompt: &str) -> Result<String, ApiError> {
        self.client
            .generate_content(model, prompt, &GENERATION_CONFIG)
            .await
    }
}

/// Builds the ordered candidate list: the default model first, then up to
/// three discovered models, or the fixed fallbacks when discovery came back
/// empty. Duplicates keep their first-seen position.
fn candidate_models(default_model: &str, discovered: &[String]) -> Vec<String> {
    let mut candidates = vec![default_model.to_string()];
    if discovered.is_empty() {
        candidates.extend(FALLBACK_MODELS.iter().map(|model| model.to_string()));
    } else {
        candidates.extend(
            discovered
                .iter()
                .take(DISCOVERED_CANDIDATE_LIMIT)
                .cloned(),
        );
    }

    let mut unique = Vec::with_capacity(candidates.len());
    for model in candidates {
        if !unique.contains(&model) {
            unique.push(model);
        }
    }
    unique
}

#[cfg(test)]
mod tests;
