//! HTTP client for the public Google translate endpoint
//!
//! Same wire format the `translate_a/single` web client uses: the
//! response is a nested JSON array whose first element holds one
//! `[translated, original, ...]` entry per segment.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{QaError, Result};
use crate::language::Language;
use crate::translate::Translate;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the unauthenticated Google endpoint
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a translator with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different endpoint (test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, text: &str, source: &str, target: &str) -> Result<String> {
        // Empty input is not worth a round trip
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        join_segments(&body).ok_or(QaError::TranslationFormat)
    }
}

/// Concatenate the translated segments from a `translate_a/single`
/// response body.
fn join_segments(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn to_english(&self, text: &str) -> Result<String> {
        self.request(text, "auto", Language::En.code()).await
    }

    async fn from_english(&self, text: &str, target: Language) -> Result<String> {
        self.request(text, Language::En.code(), target.code()).await
    }
}
