/// Answer synthesis errors. Every variant is absorbed by the
/// deterministic fallback; none crosses the pipeline boundary.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("completion request failed: {reason}")]
    CompletionFailed { reason: String },

    #[error("model returned an empty completion")]
    EmptyCompletion,

    #[error("no credentials for the completion service")]
    MissingCredentials,
}
