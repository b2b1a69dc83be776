//! # trellis-core
//!
//! Foundation crate for the Trellis KG-QA system.
//! Defines all types, traits, errors, config, and text helpers.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod question;
pub mod text;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrellisConfig;
pub use errors::{TrellisError, TrellisResult};
pub use models::{CandidateItem, CandidateMeta, GroundTruth, QaRecord, Schema, Triple};
pub use question::QuestionType;
