//! Two-stage retrieval over a triple-indexed vector store.
//!
//! Stage 1: embed the question and over-fetch nearest candidates.
//! Stage 2: rescore the pool with either four weighted signals or a
//! cross-encoder, then truncate to the requested count.

pub mod classifier;
pub mod document;
pub mod engine;
pub mod ranking;
pub mod store;

pub use classifier::QuestionClassifier;
pub use engine::RetrievalEngine;
pub use ranking::{Rescorer, SignalWeights};
pub use store::MemoryVectorStore;
