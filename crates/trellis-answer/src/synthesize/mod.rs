//! Two-stage answer synthesis: LLM primary, deterministic fallback.
//!
//! The contract is that synthesis never raises. A missing chat model,
//! rejected credentials, transport failure, or an empty completion all
//! land on the per-type extraction in [`fallback`]; an empty candidate
//! list short-circuits to the sentinel answer.

pub mod fallback;
pub mod prompt;

pub use fallback::NO_ANSWER;

use tracing::{debug, warn};
use trellis_core::models::{CandidateItem, ReasoningChain, SynthesizedAnswer};
use trellis_core::question::QuestionType;
use trellis_core::traits::IChatModel;

/// Produces the final short answer for a question.
pub struct AnswerSynthesizer<'a> {
    chat: Option<&'a dyn IChatModel>,
}

impl<'a> AnswerSynthesizer<'a> {
    /// Fallback-only synthesizer.
    pub fn new() -> Self {
        Self { chat: None }
    }

    /// Attach an LLM for the primary path.
    pub fn with_chat_model(mut self, chat: &'a dyn IChatModel) -> Self {
        self.chat = Some(chat);
        self
    }

    /// Synthesize an answer from the reasoning chain and candidates.
    pub fn synthesize(
        &self,
        question: &str,
        chain: &ReasoningChain,
        candidates: &[CandidateItem],
        question_type: QuestionType,
    ) -> SynthesizedAnswer {
        if candidates.is_empty() {
            return SynthesizedAnswer::sentinel(NO_ANSWER);
        }

        // Primary: LLM completion over the verbalized knowledge.
        if let Some(chat) = self.chat {
            if chat.is_available() {
                let prompt = prompt::rag_prompt(question, chain);
                match chat.complete(&prompt) {
                    Ok(text) => {
                        let trimmed = text.trim();
                        if !trimmed.is_empty() {
                            return SynthesizedAnswer::llm(trimmed);
                        }
                        debug!("chat model returned an empty completion, using extraction");
                    }
                    Err(e) => {
                        warn!(error = %e, "chat completion failed, using extraction");
                    }
                }
            } else {
                debug!(provider = chat.name(), "chat model unavailable, using extraction");
            }
        }

        // Fallback: deterministic per-type extraction.
        SynthesizedAnswer::fallback(fallback::extract(question, question_type, candidates))
    }
}

impl Default for AnswerSynthesizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
