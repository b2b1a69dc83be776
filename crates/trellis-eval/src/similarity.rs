//! Lexical answer scoring and head-to-head comparison.

use serde::{Deserialize, Serialize};
use trellis_core::text;

const EXACT_WEIGHT: f64 = 0.5;
const CONTAINS_WEIGHT: f64 = 0.3;
const OVERLAP_WEIGHT: f64 = 0.2;

/// How close a produced answer is to the expected one.
///
/// All components live in [0, 1]; the composite is their weighted sum
/// and inherits the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerSimilarity {
    pub exact_match: f64,
    pub contains_match: f64,
    pub word_overlap: f64,
    pub composite_score: f64,
}

impl AnswerSimilarity {
    /// The four component scores in report order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("exact_match", self.exact_match),
            ("contains_match", self.contains_match),
            ("word_overlap", self.word_overlap),
            ("composite_score", self.composite_score),
        ]
    }
}

/// Score a predicted answer against the expected one.
///
/// Both sides are trimmed and lowercased first. Exact and containment
/// matches are binary; word overlap is the fraction of the expected
/// answer's distinct tokens found in the prediction.
pub fn score(predicted: &str, expected: &str) -> AnswerSimilarity {
    let predicted = predicted.trim().to_lowercase();
    let expected = expected.trim().to_lowercase();

    let exact_match = if predicted == expected { 1.0 } else { 0.0 };
    let contains_match = if predicted.contains(&expected) || expected.contains(&predicted) {
        1.0
    } else {
        0.0
    };
    let word_overlap = text::token_overlap_ratio(&predicted, &expected);

    AnswerSimilarity {
        exact_match,
        contains_match,
        word_overlap,
        composite_score: exact_match * EXACT_WEIGHT
            + contains_match * CONTAINS_WEIGHT
            + word_overlap * OVERLAP_WEIGHT,
    }
}

/// Which system produced the better answer for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    Rag,
    Llm,
    Tie,
}

impl Winner {
    pub fn label(self) -> &'static str {
        match self {
            Winner::Rag => "RAG",
            Winner::Llm => "LLM",
            Winner::Tie => "TIE",
        }
    }
}

/// Decide the per-question winner by composite score.
pub fn winner(rag: &AnswerSimilarity, llm: &AnswerSimilarity) -> Winner {
    if rag.composite_score > llm.composite_score {
        Winner::Rag
    } else if llm.composite_score > rag.composite_score {
        Winner::Llm
    } else {
        Winner::Tie
    }
}
