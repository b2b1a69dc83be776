//! Precision@K, Recall@K, and self-relative nDCG@K for one query.

use trellis_core::models::{CandidateItem, GroundTruth, MetricsResult, RankingMetrics};

use crate::relevance::{self, Relevance};

/// Evaluate a ranked candidate list against ground truth at each K.
///
/// Every requested K gets an entry, computed at min(K, list length).
/// An empty list scores zero across the board.
pub fn evaluate(
    candidates: &[CandidateItem],
    ground_truth: &GroundTruth,
    k_values: &[usize],
) -> MetricsResult {
    let mut result = MetricsResult::new();
    if candidates.is_empty() {
        for &k in k_values {
            result.insert(k, RankingMetrics::ZERO);
        }
        return result;
    }

    let grades: Vec<Relevance> = candidates
        .iter()
        .map(|c| relevance::grade(c, ground_truth))
        .collect();

    for &k in k_values {
        let cut = k.min(grades.len());
        result.insert(k, at_k(&grades, cut));
    }
    result
}

fn at_k(grades: &[Relevance], k: usize) -> RankingMetrics {
    if k == 0 {
        return RankingMetrics::ZERO;
    }
    let top = &grades[..k];
    let relevant = top.iter().filter(|r| r.relevant).count();

    RankingMetrics {
        precision: relevant as f64 / k as f64,
        // Exactly one relevant document is assumed to exist per query,
        // so recall saturates at the first hit.
        recall: relevant.min(1) as f64,
        ndcg: ndcg_at_k(top),
    }
}

/// Self-relative nDCG over the top-K graded values.
///
/// The ideal ordering re-sorts the same top-K multiset rather than
/// consulting a corpus-wide oracle, so a perfectly ordered top-K
/// scores 1.0 even when better documents were never retrieved. An
/// all-zero top-K scores 0.
fn ndcg_at_k(top: &[Relevance]) -> f64 {
    let dcg: f64 = top
        .iter()
        .enumerate()
        .map(|(i, r)| r.graded / ((i + 2) as f64).log2())
        .sum();

    let mut ideal: Vec<f64> = top.iter().map(|r| r.graded).collect();
    ideal.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let idcg: f64 = ideal
        .iter()
        .enumerate()
        .map(|(i, g)| g / ((i + 2) as f64).log2())
        .sum();

    if idcg > 0.0 {
        dcg / idcg
    } else {
        0.0
    }
}
