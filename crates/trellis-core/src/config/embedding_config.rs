use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding service configuration.
///
/// The API key is read from the environment variable named by
/// `api_key_env`, never from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding endpoint URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Expected vector dimensions.
    pub dimensions: usize,
    /// Texts per batch request.
    pub batch_size: usize,
    /// Attempts per request (first try + retries).
    pub max_retries: u32,
    /// In-memory cache max entries.
    pub cache_size: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            api_key_env: defaults::DEFAULT_EMBEDDING_KEY_ENV.to_string(),
        }
    }
}
