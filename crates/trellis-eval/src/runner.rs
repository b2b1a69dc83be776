//! Batch evaluation: the answer pipeline against an optional
//! no-retrieval baseline model, scored per question and aggregated.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use trellis_answer::synthesize::prompt;
use trellis_answer::AnswerPipeline;
use trellis_core::config::EvalConfig;
use trellis_core::errors::EvalError;
use trellis_core::models::{MetricsResult, QaRecord, SynthesisStage};
use trellis_core::question::QuestionType;
use trellis_core::traits::IChatModel;
use uuid::Uuid;

use crate::aggregate::{self, EvalSummary};
use crate::dataset;
use crate::metrics;
use crate::similarity::{self, AnswerSimilarity, Winner};

/// Everything recorded for one evaluated question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionEvaluation {
    pub question: String,
    pub expected_answer: String,
    pub question_type: QuestionType,
    pub source_file: String,
    pub rag_answer: String,
    pub synthesis_stage: SynthesisStage,
    /// Absent when no baseline ran or its call failed.
    pub llm_answer: Option<String>,
    pub rag_scores: AnswerSimilarity,
    pub llm_scores: Option<AnswerSimilarity>,
    pub winner: Option<Winner>,
    pub retrieval: MetricsResult,
}

/// One full evaluation run: per-question results plus the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<QuestionEvaluation>,
    pub summary: EvalSummary,
}

/// Runs the answer pipeline over a QA dataset and scores it.
///
/// Questions are independent, so the batch runs data-parallel; each
/// question's pipeline stays sequential internally.
pub struct EvalRunner<'a> {
    pipeline: &'a AnswerPipeline<'a>,
    baseline: Option<&'a dyn IChatModel>,
    config: EvalConfig,
}

impl<'a> EvalRunner<'a> {
    pub fn new(pipeline: &'a AnswerPipeline<'a>, config: EvalConfig) -> Self {
        Self {
            pipeline,
            baseline: None,
            config,
        }
    }

    /// Attach a baseline model answering from the bare question,
    /// without retrieved context.
    pub fn with_baseline(mut self, chat: &'a dyn IChatModel) -> Self {
        self.baseline = Some(chat);
        self
    }

    /// Load the configured dataset and evaluate it.
    pub fn run(&self) -> Result<EvalOutcome, EvalError> {
        let records = dataset::load(&self.config)?;
        Ok(self.evaluate_records(&records))
    }

    /// Evaluate an already-loaded record set.
    pub fn evaluate_records(&self, records: &[QaRecord]) -> EvalOutcome {
        let results: Vec<QuestionEvaluation> = records
            .par_iter()
            .map(|record| self.evaluate_one(record))
            .collect();
        let summary = aggregate::summarize(&results);

        let outcome = EvalOutcome {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            results,
            summary,
        };
        info!(
            run_id = %outcome.run_id,
            questions = outcome.results.len(),
            baseline = self.baseline.is_some(),
            "evaluation run complete"
        );
        outcome
    }

    fn evaluate_one(&self, record: &QaRecord) -> QuestionEvaluation {
        let outcome = self
            .pipeline
            .answer_with_type(&record.question, record.declared_type());
        let retrieval = metrics::evaluate(
            &outcome.candidates,
            &record.ground_truth(),
            &self.config.k_values,
        );
        let rag_scores = similarity::score(&outcome.answer.text, &record.answer);

        let llm_answer = self
            .baseline
            .and_then(|chat| baseline_answer(chat, &record.question));
        let llm_scores = llm_answer
            .as_deref()
            .map(|answer| similarity::score(answer, &record.answer));
        let winner = llm_scores
            .as_ref()
            .map(|llm| similarity::winner(&rag_scores, llm));

        debug!(
            question = %record.question,
            stage = ?outcome.answer.stage,
            winner = ?winner,
            "question evaluated"
        );

        QuestionEvaluation {
            question: record.question.clone(),
            expected_answer: record.answer.clone(),
            question_type: outcome.question_type,
            source_file: record.source_file.clone(),
            rag_answer: outcome.answer.text,
            synthesis_stage: outcome.answer.stage,
            llm_answer,
            rag_scores,
            llm_scores,
            winner,
            retrieval,
        }
    }
}

/// One baseline completion; failures degrade to "no baseline answer"
/// for this question rather than aborting the batch.
fn baseline_answer(chat: &dyn IChatModel, question: &str) -> Option<String> {
    if !chat.is_available() {
        debug!(model = chat.name(), "baseline model unavailable");
        return None;
    }
    match chat.complete(&prompt::baseline_prompt(question)) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(error) => {
            warn!(%error, "baseline completion failed");
            None
        }
    }
}
