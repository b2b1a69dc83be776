//! Cross-encoder rescoring client.
//!
//! Blocking client for a hosted rerank endpoint. One attempt per call:
//! failures flip the availability flag so the rescorer falls back to
//! the multi-signal strategy for the rest of the run.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use trellis_core::config::RescoringConfig;
use trellis_core::errors::{ClientError, TrellisResult};
use trellis_core::traits::ICrossEncoder;

#[derive(Debug)]
pub struct CrossEncoderClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    available: AtomicBool,
}

#[derive(Serialize)]
struct RerankRequest {
    model: String,
    query: String,
    documents: Vec<String>,
}

#[derive(Deserialize)]
struct RerankResponse {
    results: Vec<RerankEntry>,
}

#[derive(Deserialize)]
struct RerankEntry {
    index: usize,
    relevance_score: f64,
}

impl CrossEncoderClient {
    /// Build a client from config, reading the API key from the
    /// environment variable named in `config.api_key_env`.
    pub fn from_config(config: &RescoringConfig) -> Result<Self, ClientError> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| ClientError::MissingCredentials {
                provider: "cross-encoder".to_string(),
                env_var: config.api_key_env.clone(),
            })?;
        Ok(Self::new(config, api_key))
    }

    /// Build a client with an explicit API key.
    pub fn new(config: &RescoringConfig, api_key: String) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.cross_encoder_endpoint.clone(),
            model: config.cross_encoder_model.clone(),
            api_key,
            available: AtomicBool::new(true),
        }
    }

    /// Reset availability after a config change or health check.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    fn send_request(&self, query: &str, documents: &[String]) -> Result<Vec<f64>, ClientError> {
        let request = RerankRequest {
            model: self.model.clone(),
            query: query.to_string(),
            documents: documents.to_vec(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
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

        let parsed: RerankResponse = response.json().map_err(|e| ClientError::Decode {
            reason: e.to_string(),
        })?;

        if parsed.results.len() != documents.len() {
            return Err(ClientError::BatchMismatch {
                sent: documents.len(),
                received: parsed.results.len(),
            });
        }

        // The service returns entries sorted by score; restore input order.
        let mut scores = vec![0.0f64; documents.len()];
        for entry in parsed.results {
            let slot = scores
                .get_mut(entry.index)
                .ok_or_else(|| ClientError::Decode {
                    reason: format!("result index {} out of range", entry.index),
                })?;
            *slot = entry.relevance_score;
        }

        Ok(scores)
    }
}

impl ICrossEncoder for CrossEncoderClient {
    fn score_pairs(&self, query: &str, documents: &[String]) -> TrellisResult<Vec<f64>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }
        if !self.available.load(Ordering::Relaxed) {
            return Err(ClientError::Unavailable {
                provider: self.model.clone(),
            }
            .into());
        }

        match self.send_request(query, documents) {
            Ok(scores) => Ok(scores),
            Err(e) => {
                self.available.store(false, Ordering::Relaxed);
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
