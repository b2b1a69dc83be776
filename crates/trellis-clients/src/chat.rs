//! Chat completion client for answer synthesis.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use trellis_core::config::SynthesisConfig;
use trellis_core::errors::{ClientError, TrellisResult};
use trellis_core::traits::IChatModel;

const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant that provides direct, concise answers without additional explanations.";

/// Blocking chat completion client. No retry: a failed call surfaces
/// immediately so the synthesizer can take its deterministic fallback.
#[derive(Debug)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
    max_tokens: u32,
    available: AtomicBool,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ChatClient {
    /// Build a client from config, reading the API key from the
    /// environment variable named in `config.api_key_env`.
    pub fn from_config(config: &SynthesisConfig) -> Result<Self, ClientError> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| ClientError::MissingCredentials {
                provider: "chat".to_string(),
                env_var: config.api_key_env.clone(),
            })?;
        Ok(Self::new(config, api_key))
    }

    /// Build a client with an explicit API key.
    pub fn new(config: &SynthesisConfig, api_key: String) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            available: AtomicBool::new(true),
        }
    }

    /// Reset availability after a config change.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    fn send_request(&self, prompt: &str) -> Result<String, ClientError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
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

        let parsed: ChatResponse = response.json().map_err(|e| ClientError::Decode {
            reason: e.to_string(),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(ClientError::EmptyResponse)
    }
}

impl IChatModel for ChatClient {
    fn complete(&self, prompt: &str) -> TrellisResult<String> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(ClientError::Unavailable {
                provider: self.model.clone(),
            }
            .into());
        }

        match self.send_request(prompt) {
            Ok(text) => Ok(text),
            Err(e) => {
                // Rejected credentials will reject every later call too.
                if matches!(&e, ClientError::Api { status, .. } if *status == 401 || *status == 403)
                {
                    self.available.store(false, Ordering::Relaxed);
                }
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
