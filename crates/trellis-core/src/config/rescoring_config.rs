use serde::{Deserialize, Serialize};

use super::defaults;

/// Which stage-2 strategy orders the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescoreStrategy {
    /// Four hand-weighted signals; always available.
    #[default]
    MultiSignal,
    /// External pairwise relevance model; falls back to multi-signal
    /// when the service is unavailable.
    CrossEncoder,
}

/// Stage-2 rescoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RescoringConfig {
    pub strategy: RescoreStrategy,
    /// Results returned to the caller after rescoring.
    pub result_count: usize,
    /// Stage-1 over-fetch: pool = result_count × multiplier.
    pub rerank_multiplier: usize,
    /// Minimum stage-1 pool size regardless of result_count.
    pub rerank_floor: usize,
    /// Cross-encoder scoring endpoint.
    pub cross_encoder_endpoint: String,
    /// Cross-encoder model identifier.
    pub cross_encoder_model: String,
    /// Environment variable holding the cross-encoder API key.
    pub api_key_env: String,
}

impl Default for RescoringConfig {
    fn default() -> Self {
        Self {
            strategy: RescoreStrategy::MultiSignal,
            result_count: defaults::DEFAULT_RESULT_COUNT,
            rerank_multiplier: defaults::DEFAULT_RERANK_MULTIPLIER,
            rerank_floor: defaults::DEFAULT_RERANK_FLOOR,
            cross_encoder_endpoint: defaults::DEFAULT_CROSS_ENCODER_ENDPOINT.to_string(),
            cross_encoder_model: defaults::DEFAULT_CROSS_ENCODER_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_KEY_ENV.to_string(),
        }
    }
}

impl RescoringConfig {
    /// Stage-1 pool size for a requested result count.
    pub fn stage1_pool(&self, result_count: usize) -> usize {
        (result_count * self.rerank_multiplier).max(self.rerank_floor)
    }
}
