use crate::errors::TrellisResult;

/// Cross-encoder relevance scoring for query/document pairs.
pub trait ICrossEncoder: Send + Sync {
    /// Score each document against the query. Returns one score per
    /// document, in input order.
    fn score_pairs(&self, query: &str, documents: &[String]) -> TrellisResult<Vec<f64>>;

    /// Human-readable scorer name.
    fn name(&self) -> &str;

    /// Whether the scorer is currently usable.
    fn is_available(&self) -> bool;
}
