pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_MODEL_CACHE_TTL_SECS: u64 = 300;
