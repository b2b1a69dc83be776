use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer-synthesis (LLM completion) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Chat completion endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Low temperature keeps short answers stable across runs.
    pub temperature: f64,
    /// Completion length cap; answers are a few words.
    pub max_tokens: u32,
    /// Environment variable holding the API key. An unset variable means
    /// synthesis goes straight to the deterministic fallback.
    pub api_key_env: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_CHAT_ENDPOINT.to_string(),
            model: defaults::DEFAULT_CHAT_MODEL.to_string(),
            temperature: defaults::DEFAULT_CHAT_TEMPERATURE,
            max_tokens: defaults::DEFAULT_CHAT_MAX_TOKENS,
            api_key_env: defaults::DEFAULT_CHAT_KEY_ENV.to_string(),
        }
    }
}
