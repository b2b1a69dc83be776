//! Trait seams for the external collaborators: embedding service,
//! vector store, cross-encoder, and chat completion.

pub mod chat;
pub mod cross_encoder;
pub mod embedding;
pub mod vector_store;

pub use chat::IChatModel;
pub use cross_encoder::ICrossEncoder;
pub use embedding::IEmbeddingProvider;
pub use vector_store::IVectorStore;
