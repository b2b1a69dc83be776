//! Relevance grading of one candidate against ground truth.
//!
//! With a reference triple, grading is position-wise field comparison.
//! Without one, it degrades to token overlap between the candidate's
//! text and the expected answer. Both paths produce a graded score
//! (consumed by nDCG) and a binary judgment (consumed by precision
//! and recall).

use trellis_core::models::{CandidateItem, GroundTruth, Triple};
use trellis_core::text;

/// Binary threshold for the token-overlap fallback.
const TEXT_OVERLAP_THRESHOLD: f64 = 0.1;

/// Graded relevance plus the binary judgment derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relevance {
    /// Graded score in [0, 1], used by nDCG.
    pub graded: f64,
    /// Binary judgment, used by precision and recall.
    pub relevant: bool,
}

impl Relevance {
    pub const NONE: Relevance = Relevance {
        graded: 0.0,
        relevant: false,
    };
}

/// Grade one candidate against the ground truth.
pub fn grade(candidate: &CandidateItem, ground_truth: &GroundTruth) -> Relevance {
    match &ground_truth.reference_triple {
        Some(reference) => triple_relevance(&candidate.triple, reference),
        None => text_relevance(candidate, &ground_truth.expected_answer),
    }
}

/// Position-wise triple comparison.
///
/// 3 matching fields grade 1.0, exactly 2 grade 0.6, fewer grade 0;
/// the binary judgment is true for 2 or 3 matches.
pub fn triple_relevance(retrieved: &Triple, reference: &Triple) -> Relevance {
    let retrieved_fields = retrieved.fields();
    let reference_fields = reference.fields();
    let matches = retrieved_fields
        .iter()
        .zip(reference_fields.iter())
        .filter(|(a, b)| a == b)
        .count();

    match matches {
        3 => Relevance {
            graded: 1.0,
            relevant: true,
        },
        2 => Relevance {
            graded: 0.6,
            relevant: true,
        },
        _ => Relevance::NONE,
    }
}

/// Token-overlap fallback when no reference triple exists.
///
/// The graded score is the raw overlap ratio; the binary judgment
/// applies the 0.1 threshold. An empty expected answer grades zero,
/// which is how malformed ground truth degrades without aborting.
pub fn text_relevance(candidate: &CandidateItem, expected_answer: &str) -> Relevance {
    let text = if candidate.document.is_empty() {
        candidate.triple.fields().join(" ")
    } else {
        candidate.document.clone()
    };
    let ratio = text::token_overlap_ratio(&text, expected_answer);
    Relevance {
        graded: ratio,
        relevant: ratio > TEXT_OVERLAP_THRESHOLD,
    }
}
