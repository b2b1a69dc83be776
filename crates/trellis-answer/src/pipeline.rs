//! AnswerPipeline: the full per-question flow.
//!
//! classify → retrieve+rescore → verbalize → synthesize. Strictly
//! sequential for one question; no state survives between questions,
//! so callers may run many pipelines in parallel.

use tracing::{debug, info};
use trellis_core::models::QueryOutcome;
use trellis_core::question::QuestionType;
use trellis_core::traits::IChatModel;
use trellis_retrieval::{QuestionClassifier, RetrievalEngine};

use crate::synthesize::AnswerSynthesizer;
use crate::verbalize;

/// One-question answering pipeline over a retrieval engine.
pub struct AnswerPipeline<'a> {
    classifier: QuestionClassifier,
    engine: RetrievalEngine<'a>,
    synthesizer: AnswerSynthesizer<'a>,
    result_count: usize,
}

impl<'a> AnswerPipeline<'a> {
    pub fn new(engine: RetrievalEngine<'a>, result_count: usize) -> Self {
        Self {
            classifier: QuestionClassifier::new(),
            engine,
            synthesizer: AnswerSynthesizer::new(),
            result_count,
        }
    }

    /// Attach an LLM for primary answer synthesis.
    pub fn with_chat_model(mut self, chat: &'a dyn IChatModel) -> Self {
        self.synthesizer = AnswerSynthesizer::new().with_chat_model(chat);
        self
    }

    /// Answer a question, classifying its type from the text.
    pub fn answer(&self, question: &str) -> QueryOutcome {
        self.answer_with_type(question, None)
    }

    /// Answer a question with an optionally pre-declared type.
    ///
    /// QA records carry a declared type; when present it wins over
    /// classification, mirroring how evaluation datasets are scored.
    pub fn answer_with_type(
        &self,
        question: &str,
        declared: Option<QuestionType>,
    ) -> QueryOutcome {
        // Step 1: Classify, unless the caller already knows the type.
        let question_type = declared.unwrap_or_else(|| self.classifier.classify(question));
        debug!(question_type = question_type.label(), "question classified");

        // Step 2: Retrieve and rescore.
        let candidates = self.engine.retrieve(question, self.result_count);

        // Step 3: Verbalize into a reasoning chain.
        let chain = verbalize::verbalize(question_type, &candidates);

        // Step 4: Synthesize the final answer.
        let answer = self
            .synthesizer
            .synthesize(question, &chain, &candidates, question_type);

        info!(
            question_type = question_type.label(),
            candidates = candidates.len(),
            stage = ?answer.stage,
            "question answered"
        );

        QueryOutcome {
            question: question.to_string(),
            question_type,
            chain,
            candidates,
            answer,
        }
    }
}
