//! Layered configuration: TOML sections per subsystem, every field
//! defaulted, API keys only ever read from the environment.

pub mod defaults;
pub mod embedding_config;
pub mod eval_config;
pub mod observability_config;
pub mod rescoring_config;
pub mod synthesis_config;

pub use embedding_config::EmbeddingConfig;
pub use eval_config::EvalConfig;
pub use observability_config::ObservabilityConfig;
pub use rescoring_config::{RescoreStrategy, RescoringConfig};
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Any subset of sections may appear in the
/// TOML file; missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    pub embedding: EmbeddingConfig,
    pub rescoring: RescoringConfig,
    pub synthesis: SynthesisConfig,
    pub evaluation: EvalConfig,
    pub observability: ObservabilityConfig,
}

impl TrellisConfig {
    /// Parse a TOML string. Empty input yields all defaults.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })
    }

    /// Load from a TOML file on disk.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }
}
