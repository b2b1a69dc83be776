//! Retrieval-quality evaluation over QA datasets.
//!
//! Grades ranked candidates against per-question ground truth
//! (Precision@K, Recall@K, and a self-relative nDCG@K), scores final
//! answers against expected answers, runs whole datasets in parallel,
//! and writes JSON/CSV/Markdown reports.

pub mod aggregate;
pub mod dataset;
pub mod metrics;
pub mod relevance;
pub mod report;
pub mod runner;
pub mod similarity;

pub use metrics::evaluate;
pub use runner::{EvalOutcome, EvalRunner, QuestionEvaluation};
pub use similarity::AnswerSimilarity;
