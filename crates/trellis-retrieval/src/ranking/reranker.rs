//! Cross-encoder rescoring with silent multi-signal fallback.
//!
//! The cross-encoder scores (query, document) pairs remotely. Any
//! failure, including an unavailable or absent encoder, degrades to
//! the multi-signal scorer; the caller always gets a scored list.

use tracing::{debug, warn};
use trellis_core::models::CandidateItem;
use trellis_core::traits::ICrossEncoder;

use super::scorer::{self, SignalWeights};

/// Rescore candidates with the cross-encoder, falling back to the
/// multi-signal scorer when the service cannot be used.
pub fn rescore(
    query: &str,
    candidates: Vec<CandidateItem>,
    encoder: Option<&dyn ICrossEncoder>,
    weights: &SignalWeights,
) -> Vec<CandidateItem> {
    if candidates.is_empty() {
        return candidates;
    }

    let encoder = match encoder {
        Some(e) if e.is_available() => e,
        _ => {
            debug!("cross-encoder unavailable, using multi-signal scoring");
            return scorer::score(query, candidates, weights);
        }
    };

    let documents: Vec<String> = candidates.iter().map(|c| c.document.clone()).collect();

    match encoder.score_pairs(query, &documents) {
        Ok(scores) if scores.len() == candidates.len() => {
            let mut rescored = candidates;
            for (candidate, score) in rescored.iter_mut().zip(scores) {
                candidate.rerank_score = Some(score);
                candidate.signal_breakdown = None;
            }
            rescored.sort_by(|a, b| {
                b.ranking_score()
                    .partial_cmp(&a.ranking_score())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            rescored
        }
        Ok(scores) => {
            warn!(
                sent = candidates.len(),
                received = scores.len(),
                "cross-encoder returned a mismatched batch, using multi-signal scoring"
            );
            scorer::score(query, candidates, weights)
        }
        Err(e) => {
            warn!(error = %e, "cross-encoder call failed, using multi-signal scoring");
            scorer::score(query, candidates, weights)
        }
    }
}
