//! Candidate rescoring for stage two of retrieval.
//!
//! Stage one ranks by embedding distance alone. The [`Rescorer`]
//! re-orders that pool with either the local multi-signal scorer or a
//! remote cross-encoder, selected per call by [`RescoreStrategy`].

pub mod reranker;
pub mod scorer;

pub use scorer::SignalWeights;

use trellis_core::config::RescoreStrategy;
use trellis_core::models::CandidateItem;
use trellis_core::traits::ICrossEncoder;

/// Strategy-dispatching rescorer.
///
/// Holds the signal weights and an optional cross-encoder. When the
/// cross-encoder strategy is requested without an encoder, or the
/// encoder fails, rescoring silently degrades to the multi-signal
/// path so retrieval never loses its second stage.
pub struct Rescorer<'a> {
    weights: SignalWeights,
    cross_encoder: Option<&'a dyn ICrossEncoder>,
}

impl<'a> Rescorer<'a> {
    pub fn new() -> Self {
        Self {
            weights: SignalWeights::default(),
            cross_encoder: None,
        }
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_cross_encoder(mut self, encoder: &'a dyn ICrossEncoder) -> Self {
        self.cross_encoder = Some(encoder);
        self
    }

    /// Rescore `candidates` against `query` using the requested strategy.
    pub fn rescore(
        &self,
        query: &str,
        candidates: Vec<CandidateItem>,
        strategy: RescoreStrategy,
    ) -> Vec<CandidateItem> {
        if candidates.is_empty() {
            return candidates;
        }
        match strategy {
            RescoreStrategy::MultiSignal => scorer::score(query, candidates, &self.weights),
            RescoreStrategy::CrossEncoder => {
                reranker::rescore(query, candidates, self.cross_encoder, &self.weights)
            }
        }
    }
}

impl Default for Rescorer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
