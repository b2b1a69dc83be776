//! Hosted embedding service client.
//!
//! Blocking HTTP client for OpenAI-compatible embedding endpoints.
//! Retries with exponential backoff and caches results in memory
//! keyed by content hash.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use moka::sync::Cache;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trellis_core::config::EmbeddingConfig;
use trellis_core::errors::{ClientError, TrellisResult};
use trellis_core::traits::IEmbeddingProvider;

/// Blocking embedding client with retry, availability tracking, and
/// an in-memory result cache.
#[derive(Debug)]
pub struct EmbeddingClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    dimensions: usize,
    batch_size: usize,
    max_retries: u32,
    available: AtomicBool,
    cache: Cache<String, Vec<f32>>,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

/// Cache key for a text: blake3 content hash.
fn content_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

impl EmbeddingClient {
    /// Build a client from config, reading the API key from the
    /// environment variable named in `config.api_key_env`.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, ClientError> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| ClientError::MissingCredentials {
                provider: "embedding".to_string(),
                env_var: config.api_key_env.clone(),
            })?;
        Ok(Self::new(config, api_key))
    }

    /// Build a client with an explicit API key.
    pub fn new(config: &EmbeddingConfig, api_key: String) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            dimensions: config.dimensions,
            batch_size: config.batch_size.max(1),
            max_retries: config.max_retries,
            available: AtomicBool::new(true),
            cache: Cache::new(config.cache_size),
        }
    }

    /// Reset availability after a config change or health check.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    /// Send one batch with retry and exponential backoff.
    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ClientError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(ClientError::Unavailable {
                provider: self.model.clone(),
            });
        }

        let request = EmbedRequest {
            model: self.model.clone(),
            input: texts.to_vec(),
        };

        let mut last_err = None;
        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                std::thread::sleep(delay);
                debug!(attempt, "retrying embedding request");
            }

            match self.send_request(&request) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        self.available.store(false, Ordering::Relaxed);
        Err(last_err.unwrap_or_else(|| ClientError::Http {
            reason: "all retries exhausted".to_string(),
        }))
    }

    /// Send a single HTTP request. No retry at this level.
    fn send_request(&self, request: &EmbedRequest) -> Result<Vec<Vec<f32>>, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .map_err(|e| ClientError::Http {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EmbedResponse = response.json().map_err(|e| ClientError::Decode {
            reason: e.to_string(),
        })?;

        if parsed.data.len() != request.input.len() {
            return Err(ClientError::BatchMismatch {
                sent: request.input.len(),
                received: parsed.data.len(),
            });
        }

        let embeddings = parsed
            .data
            .into_iter()
            .map(|d| {
                let mut v = d.embedding;
                v.resize(self.dimensions, 0.0);
                v
            })
            .collect();

        Ok(embeddings)
    }
}

impl IEmbeddingProvider for EmbeddingClient {
    fn embed(&self, text: &str) -> TrellisResult<Vec<f32>> {
        let results = self.embed_batch(&[text.to_string()])?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::EmptyResponse.into())
    }

    fn embed_batch(&self, texts: &[String]) -> TrellisResult<Vec<Vec<f32>>> {
        let mut out = vec![Vec::new(); texts.len()];
        let mut misses = Vec::new();

        for (i, text) in texts.iter().enumerate() {
            match self.cache.get(&content_key(text)) {
                Some(vec) => out[i] = vec,
                None => misses.push(i),
            }
        }

        if !misses.is_empty() {
            let miss_texts: Vec<String> = misses.iter().map(|&i| texts[i].clone()).collect();

            let mut fetched = Vec::with_capacity(miss_texts.len());
            for chunk in miss_texts.chunks(self.batch_size) {
                fetched.extend(self.request_embeddings(chunk)?);
            }

            if fetched.len() != misses.len() {
                return Err(ClientError::BatchMismatch {
                    sent: misses.len(),
                    received: fetched.len(),
                }
                .into());
            }

            for (&i, vec) in misses.iter().zip(fetched) {
                self.cache.insert(content_key(&texts[i]), vec.clone());
                out[i] = vec;
            }
        }

        Ok(out)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
