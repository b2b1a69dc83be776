use serde::{Deserialize, Serialize};

use super::candidate::CandidateItem;
use super::chain::ReasoningChain;
use crate::question::QuestionType;

/// Which stage of the synthesizer produced the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStage {
    /// The LLM completion was used directly.
    Llm,
    /// The deterministic per-type extraction was used.
    Fallback,
    /// No candidates were available; the sentinel answer was returned.
    Sentinel,
}

/// The synthesized answer, tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedAnswer {
    pub text: String,
    pub stage: SynthesisStage,
}

impl SynthesizedAnswer {
    pub fn llm(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stage: SynthesisStage::Llm,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stage: SynthesisStage::Fallback,
        }
    }

    pub fn sentinel(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stage: SynthesisStage::Sentinel,
        }
    }
}

/// Everything the pipeline produces for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub question: String,
    pub question_type: QuestionType,
    pub chain: ReasoningChain,
    /// Rescored candidates in final rank order.
    pub candidates: Vec<CandidateItem>,
    pub answer: SynthesizedAnswer,
}
