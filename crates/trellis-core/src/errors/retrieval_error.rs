/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("vector store search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("rescoring failed: {reason}")]
    RescoringFailed { reason: String },
}
