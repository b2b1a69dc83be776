// Single source of truth for all default values.

// --- Embedding ---
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.siliconflow.cn/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "BAAI/bge-m3";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1024;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 3;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_EMBEDDING_KEY_ENV: &str = "TRELLIS_API_KEY";

// --- Rescoring ---
pub const DEFAULT_RESULT_COUNT: usize = 10;
pub const DEFAULT_RERANK_MULTIPLIER: usize = 2;
pub const DEFAULT_RERANK_FLOOR: usize = 20;
pub const DEFAULT_CROSS_ENCODER_ENDPOINT: &str = "https://api.siliconflow.cn/v1/rerank";
pub const DEFAULT_CROSS_ENCODER_MODEL: &str = "BAAI/bge-reranker-base";

// --- Synthesis ---
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_CHAT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 50;
pub const DEFAULT_CHAT_KEY_ENV: &str = "OPENAI_API_KEY";

// --- Evaluation ---
pub const DEFAULT_K_VALUES: &[usize] = &[1, 3, 5, 10];
pub const DEFAULT_SAMPLE_SIZE: usize = 100;
pub const DEFAULT_DATASET_DIR: &str = "qa_datasets";
pub const DEFAULT_REPORT_DIR: &str = "evaluation";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
