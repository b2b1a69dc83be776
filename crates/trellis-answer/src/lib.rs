//! Knowledge verbalization and answer synthesis.
//!
//! Retrieved facts become a Reason/Knowledge narrative shaped by the
//! question type, then the synthesizer produces a short answer: an LLM
//! completion when one is reachable, a deterministic per-type
//! extraction otherwise. Every path returns a tagged answer; nothing
//! here raises.

pub mod pipeline;
pub mod synthesize;
pub mod verbalize;

pub use pipeline::AnswerPipeline;
pub use synthesize::AnswerSynthesizer;
pub use verbalize::verbalize;
