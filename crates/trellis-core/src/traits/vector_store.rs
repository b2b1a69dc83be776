use crate::errors::TrellisResult;
use crate::models::CandidateItem;

/// Vector similarity search over the indexed knowledge base.
///
/// Implementations return candidates ordered by ascending distance,
/// with rerank fields unset. Rescoring happens downstream.
pub trait IVectorStore: Send + Sync {
    /// Query for the `n_results` nearest candidates to the embedding.
    fn query(&self, embedding: &[f32], n_results: usize) -> TrellisResult<Vec<CandidateItem>>;

    /// Human-readable store name.
    fn name(&self) -> &str;
}
