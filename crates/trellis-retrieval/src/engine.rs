//! RetrievalEngine: orchestrates the full 2-stage pipeline.
//!
//! Stage 1: embed the question and pull a distance-ranked candidate
//! pool from the vector store, over-fetched past the requested count.
//! Stage 2: rescore the pool (multi-signal or cross-encoder) and cut
//! it down to `n_results`.
//!
//! Retrieval never raises. Embedding or search failures are logged
//! and surface as an empty candidate list so the answer pipeline can
//! fall through to its no-knowledge sentinel.

use tracing::{debug, info, warn};
use trellis_core::config::RescoringConfig;
use trellis_core::models::CandidateItem;
use trellis_core::traits::{ICrossEncoder, IEmbeddingProvider, IVectorStore};

use crate::ranking::Rescorer;

/// Two-stage retrieval over an embedded knowledge base.
pub struct RetrievalEngine<'a> {
    embedder: &'a dyn IEmbeddingProvider,
    store: &'a dyn IVectorStore,
    rescorer: Rescorer<'a>,
    config: RescoringConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingProvider,
        store: &'a dyn IVectorStore,
        config: RescoringConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            rescorer: Rescorer::new(),
            config,
        }
    }

    /// Attach a cross-encoder for the cross-encoder rescoring strategy.
    ///
    /// Without one, that strategy silently degrades to multi-signal
    /// scoring.
    pub fn with_cross_encoder(mut self, encoder: &'a dyn ICrossEncoder) -> Self {
        self.rescorer = self.rescorer.with_cross_encoder(encoder);
        self
    }

    /// Retrieve the `n_results` best candidates for a question.
    pub fn retrieve(&self, question: &str, n_results: usize) -> Vec<CandidateItem> {
        // Step 1: Embed the question.
        let embedding = match self.embedder.embed(question) {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "query embedding failed, returning no candidates");
                return Vec::new();
            }
        };

        // Step 2: Stage-1 pool, over-fetched for rescoring headroom.
        let pool_size = self.config.stage1_pool(n_results);
        let candidates = match self.store.query(&embedding, pool_size) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "vector search failed, returning no candidates");
                return Vec::new();
            }
        };

        if candidates.is_empty() {
            debug!("vector search returned no candidates");
            return Vec::new();
        }

        debug!(
            pool = candidates.len(),
            requested = pool_size,
            "stage-1 search complete"
        );

        // Step 3: Rescore and cut to the requested count.
        let mut rescored = self
            .rescorer
            .rescore(question, candidates, self.config.strategy);
        rescored.truncate(n_results);

        info!(
            results = rescored.len(),
            strategy = ?self.config.strategy,
            "retrieval complete"
        );

        rescored
    }
}
