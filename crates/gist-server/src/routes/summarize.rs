//! Summarization endpoints.

use std::num::NonZeroUsize;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use gist_core::TextId;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::{not_found_message, run_blocking};
use crate::error::ServerError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for `POST /summarize/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeQuery {
    /// Sentences in the summary. Must be at least 1.
    pub sentences: Option<NonZeroUsize>,
}

/// Request body for `POST /summarize`.
///
/// Exactly one of `text_id` and `text` must be present. Inline text is
/// summarized without being stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    /// Id of a stored text.
    #[schema(value_type = Option<Value>)]
    pub text_id: Option<TextId>,
    /// Text to summarize directly.
    pub text: Option<String>,
    /// Sentences in the summary. Must be at least 1.
    #[schema(value_type = Option<usize>, minimum = 1)]
    pub sentences: Option<NonZeroUsize>,
}

/// Summary response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    /// Top sentences joined by a space, highest score first.
    pub summary: String,
    /// Set when the requested text does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /summarize/{id} - Summarize a stored text.
///
/// A missing text yields an empty summary and a message (404 in strict mode).
#[utoipa::path(
    post,
    path = "/summarize/{id}",
    params(
        ("id" = String, Path, description = "Text ID"),
        ("sentences" = Option<usize>, Query, description = "Sentences in the summary (default: 2)"),
    ),
    responses(
        (status = 200, description = "Summary", body = SummaryResponse),
        (status = 400, description = "Invalid id or sentence count"),
        (status = 404, description = "Text not found (strict mode)", body = crate::error::ErrorResponse),
    ),
    tag = "summarize"
)]
pub async fn summarize_stored_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<SummarizeQuery>,
) -> Result<Response, ServerError> {
    let id = TextId::parse(&raw_id)?;
    summarize_by_id(&state, &id, query.sentences).await
}

/// POST /summarize - Summarize a stored text or inline text.
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary", body = SummaryResponse),
        (status = 400, description = "Neither or both of text_id and text given", body = crate::error::ErrorResponse),
        (status = 404, description = "Text not found (strict mode)", body = crate::error::ErrorResponse),
    ),
    tag = "summarize"
)]
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Response, ServerError> {
    match (request.text_id, request.text) {
        (Some(id), None) => summarize_by_id(&state, &id, request.sentences).await,
        (None, Some(text)) => {
            let summary = summarize(&state, text, request.sentences).await?;
            Ok(Json(SummaryResponse {
                summary,
                message: None,
            })
            .into_response())
        }
        (Some(_), Some(_)) => Err(ServerError::BadRequest(
            "provide either text_id or text, not both".to_string(),
        )),
        (None, None) => Err(ServerError::BadRequest(
            "one of text_id or text is required".to_string(),
        )),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

async fn summarize_by_id(
    state: &AppState,
    id: &TextId,
    sentences: Option<NonZeroUsize>,
) -> Result<Response, ServerError> {
    let Some(text) = state.store.get(id) else {
        let message = not_found_message(id);
        if state.config.strict_status {
            return Err(ServerError::NotFound(message));
        }
        return Ok(Json(SummaryResponse {
            summary: String::new(),
            message: Some(message),
        })
        .into_response());
    };

    let summary = summarize(state, text, sentences).await?;
    debug!(text_id = %id, summary_bytes = summary.len(), "Summarized stored text");
    Ok(Json(SummaryResponse {
        summary,
        message: None,
    })
    .into_response())
}

async fn summarize(
    state: &AppState,
    text: String,
    sentences: Option<NonZeroUsize>,
) -> Result<String, ServerError> {
    let summarizer = state.summarizer.clone();
    let count = sentences.map_or(summarizer.default_sentences(), NonZeroUsize::get);
    run_blocking(move || summarizer.summarize(&text, count)).await
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::ServerConfig;
    use crate::routes::test_support::{app, app_with, send};

    /// Top `n` sentences by score, ties in document order.
    fn top_sentences(sentences: &[serde_json::Value], n: usize) -> Vec<&str> {
        let mut ranked: Vec<&serde_json::Value> = sentences.iter().collect();
        ranked.sort_by(|a, b| b["score"].as_u64().cmp(&a["score"].as_u64()));
        ranked
            .into_iter()
            .take(n)
            .map(|s| s["text"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_summarize_drones_default() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/summarize/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let summary = body["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
        assert!(body.get("message").is_none());

        let (_, analyzed) = send(&app, Method::GET, "/texts/1/sentences", None).await;
        let sentences = analyzed["sentences"].as_array().unwrap();
        assert_eq!(summary, top_sentences(sentences, 2).join(" "));
    }

    #[tokio::test]
    async fn test_summarize_sentence_count() {
        let (_, body) = send(&app(), Method::POST, "/summarize/2?sentences=1", None).await;
        let summary = body["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
        assert!(gist_core::samples::INDIAN_CUISINE.contains(summary));
    }

    #[tokio::test]
    async fn test_summarize_rejects_zero_sentences() {
        let (status, _) = send(&app(), Method::POST, "/summarize/1?sentences=0", None).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_summarize_missing_text() {
        let (status, body) = send(&app(), Method::POST, "/summarize/999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "");
        assert_eq!(body["message"], "Text with ID 999 not found");

        let strict = app_with(ServerConfig::new().with_strict_status(true));
        let (status, _) = send(&strict, Method::POST, "/summarize/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_summarize_inline_text_is_not_stored() {
        let app = app();
        let text = "Paris is in France. The weather was nice. London hosted the Olympic Games.";
        let (status, body) = send(
            &app,
            Method::POST,
            "/summarize",
            Some(json!({"text": text, "sentences": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(text.contains(body["summary"].as_str().unwrap()));

        let (_, listed) = send(&app, Method::GET, "/texts", None).await;
        assert_eq!(listed.as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_summarize_body_by_id() {
        let app = app();
        let (_, by_path) = send(&app, Method::POST, "/summarize/1", None).await;
        let (_, by_body) = send(&app, Method::POST, "/summarize", Some(json!({"text_id": 1}))).await;
        assert_eq!(by_path["summary"], by_body["summary"]);
    }

    #[tokio::test]
    async fn test_summarize_body_validation() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/summarize", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "bad_request");

        let (status, _) = send(
            &app,
            Method::POST,
            "/summarize",
            Some(json!({"text_id": 1, "text": "Both."})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summarize_empty_text() {
        let (status, body) = send(&app(), Method::POST, "/summarize", Some(json!({"text": ""}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "");
    }
}
