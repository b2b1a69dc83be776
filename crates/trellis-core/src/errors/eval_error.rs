/// Evaluation harness errors: dataset loading and report writing.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("no QA dataset files found under {path}")]
    DatasetNotFound { path: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("malformed dataset file {path}: {reason}")]
    MalformedDataset { path: String, reason: String },
}
