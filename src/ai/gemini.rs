//! Gemini HTTP client for text generation.
//!
//! Sends a single-turn `generateContent` request and returns the text of the
//! first part of the first candidate.

use super::TextGenerator;
use crate::errors::GenerationError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response from `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            GenerationError::MalformedResponse("response contained no candidates".to_string())
        })?;
        let part = candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .ok_or_else(|| {
                GenerationError::MalformedResponse("candidate contained no parts".to_string())
            })?;
        part.text.ok_or_else(|| {
            GenerationError::MalformedResponse("first part contained no text".to_string())
        })
    }
}

/// Client for the Gemini REST API.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `model` - Model name (e.g., "gemini-2.0-flash")
    /// * `api_key` - API key sent as the `key` query parameter
    /// * `timeout` - Upper bound for one request, including reading the body
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingApiKey` for a blank key and
    /// `GenerationError::Transport` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GenerationError::Transport)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Sending generation request with model: {}", self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(GenerationError::Transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let generated: GenerateResponse = response.json().map_err(|e| {
            GenerationError::MalformedResponse(format!(
                "Failed to parse generation response: {}",
                e
            ))
        })?;

        let text = generated.into_text()?;
        debug!("Received completion of {} bytes", text.len());
        Ok(text)
    }
}
