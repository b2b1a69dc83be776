use crate::errors::TrellisResult;

/// Chat completion provider used for answer synthesis.
pub trait IChatModel: Send + Sync {
    /// Run a completion for the given user prompt and return the
    /// trimmed assistant text.
    fn complete(&self, prompt: &str) -> TrellisResult<String>;

    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Whether the model can currently serve completions.
    fn is_available(&self) -> bool;
}
