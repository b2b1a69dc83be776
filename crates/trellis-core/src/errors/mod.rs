//! Error handling for Trellis.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Nothing in the pipeline is fatal for a query: retrieval failures
//! propagate an empty candidate list, rescoring and synthesis fall back
//! locally. These enums are for the seams where an error is still a
//! value the caller chooses how to absorb.

pub mod client_error;
pub mod config_error;
pub mod eval_error;
pub mod retrieval_error;
pub mod synthesis_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use eval_error::EvalError;
pub use retrieval_error::RetrievalError;
pub use synthesis_error::SynthesisError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum TrellisError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TrellisResult<T> = Result<T, TrellisError>;
