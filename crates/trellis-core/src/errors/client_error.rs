/// External model-service client errors (embedding, cross-encoder, chat).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("no API key configured for {provider} (set {env_var})")]
    MissingCredentials { provider: String, env_var: String },

    #[error("provider {provider} is unavailable")]
    Unavailable { provider: String },

    #[error("HTTP request failed: {reason}")]
    Http { reason: String },

    #[error("service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response decode failed: {reason}")]
    Decode { reason: String },

    #[error("service returned an empty response")]
    EmptyResponse,

    #[error("batch length mismatch: sent {sent}, received {received}")]
    BatchMismatch { sent: usize, received: usize },
}
