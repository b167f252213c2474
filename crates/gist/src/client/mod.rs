//! HTTP client for the gist server.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use gist_core::TextId;

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(default)]
    pub texts: usize,
    #[serde(default)]
    pub pipeline: String,
}

/// A stored text, or the server's not-found message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLookup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Message-only response (deletes, not-found).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the gist server.
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client for the given server URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Check server health.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(&["health"])?;
        let response = self.http.get(url).send().await?;
        parse(response).await
    }

    /// List all stored texts.
    pub async fn list_texts(&self) -> Result<BTreeMap<TextId, String>> {
        let url = self.endpoint(&["texts"])?;
        let response = self.http.get(url).send().await?;
        // Object keys are strings on the wire; TextId keys restore numeric-first order.
        parse(response).await
    }

    /// Fetch one text.
    pub async fn get_text(&self, id: &str) -> Result<TextLookup> {
        let url = self.endpoint(&["texts", id])?;
        let response = self.http.get(url).send().await?;
        parse(response).await
    }

    /// Store a text, under `id` when given or the next numeric id otherwise.
    pub async fn add_text(&self, id: Option<&str>, text: &str) -> Result<TextLookup> {
        let url = match id {
            Some(id) => self.endpoint(&["texts", id])?,
            None => self.endpoint(&["texts"])?,
        };
        let response = self
            .http
            .post(url)
            .json(&json!({ "text": text }))
            .send()
            .await?;
        parse(response).await
    }

    /// Delete a text.
    pub async fn delete_text(&self, id: &str) -> Result<MessageResponse> {
        let url = self.endpoint(&["texts", id])?;
        let response = self.http.delete(url).send().await?;
        parse(response).await
    }

    /// Summarize a stored text.
    pub async fn summarize_stored(
        &self,
        id: &str,
        sentences: Option<usize>,
    ) -> Result<SummaryResponse> {
        let mut url = self.endpoint(&["summarize", id])?;
        if let Some(n) = sentences {
            url.query_pairs_mut()
                .append_pair("sentences", &n.to_string());
        }
        let response = self.http.post(url).send().await?;
        parse(response).await
    }

    /// Summarize text without storing it.
    pub async fn summarize_text(
        &self,
        text: &str,
        sentences: Option<usize>,
    ) -> Result<SummaryResponse> {
        let url = self.endpoint(&["summarize"])?;
        let mut body = json!({ "text": text });
        if let Some(n) = sentences {
            body["sentences"] = json!(n);
        }
        let response = self.http.post(url).json(&body).send().await?;
        parse(response).await
    }

    /// Build an endpoint URL, percent-encoding each path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Server URL cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decode a success body, or turn the error body into an error.
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("?")
            .to_string();
        bail!("Rate limited by server (retry after {}s)", retry);
    }

    match response.json::<ErrorBody>().await {
        Ok(body) => bail!("Server returned {} ({}): {}", status, body.code, body.message),
        Err(_) => bail!("Server returned error: {}", status),
    }
}
