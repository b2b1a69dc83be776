//! Shared data model for the QA pipeline and the evaluation harness.

pub mod answer;
pub mod candidate;
pub mod chain;
pub mod ground_truth;
pub mod metrics;
pub mod triple;

pub use answer::{QueryOutcome, SynthesisStage, SynthesizedAnswer};
pub use candidate::{CandidateItem, CandidateMeta};
pub use chain::ReasoningChain;
pub use ground_truth::{GroundTruth, QaRecord};
pub use metrics::{MetricsResult, RankingMetrics};
pub use triple::{Schema, Triple};
