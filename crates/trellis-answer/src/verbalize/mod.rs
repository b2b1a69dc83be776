//! CoTKR knowledge verbalization.
//!
//! Turns ranked candidates into a chain of "Reason"/"Knowledge" lines
//! whose shape follows the question type, so the synthesizer (and its
//! LLM prompt) sees facts as a narrative rather than raw triples.

pub mod builder;
pub mod templates;

pub use builder::NO_KNOWLEDGE;

use trellis_core::models::{CandidateItem, ReasoningChain};
use trellis_core::question::QuestionType;

/// Verbalize ranked candidates into a reasoning chain.
pub fn verbalize(question_type: QuestionType, candidates: &[CandidateItem]) -> ReasoningChain {
    builder::build_chain(question_type, candidates)
}
