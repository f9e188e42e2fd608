//! Configuration for the stride planner.
//!
//! Settings resolve in three layers: built-in defaults, the JSON config file
//! at `~/.stride/config`, then environment variable overrides. Validation
//! runs last so a missing API key is reported with the places it can be set.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use builder::ConfigBuilder;
pub use constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL, DEFAULT_MODEL_CACHE_TTL_SECS};
pub use types::{Config, DiscoverySettings, GeminiSettings};
