//! Blocking HTTP clients for the three external services: embedding
//! generation, cross-encoder rescoring, and chat completion.
//!
//! Each client implements the matching `trellis-core` trait so the
//! pipeline only ever sees the seam. API keys come from environment
//! variables named in the config, never from config files.

pub mod chat;
pub mod cross_encoder;
pub mod embedding;

pub use chat::ChatClient;
pub use cross_encoder::CrossEncoderClient;
pub use embedding::EmbeddingClient;
