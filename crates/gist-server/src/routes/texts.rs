//! Text storage endpoints.
//!
//! Ids in paths are numeric (`/texts/4`) or free-form names
//! (`/texts/meeting-notes`). A missing text is reported with a message and
//! status 200 unless the server runs with `strict_status`.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use gist_core::{DeleteOutcome, ScoredSentence, TextId};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::{MessageResponse, missing_text, run_blocking};
use crate::error::ServerError;
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for storing a text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreTextRequest {
    /// The text content. `text_data` is accepted as an alias.
    #[serde(default, alias = "text_data")]
    pub text: String,
}

/// A stored text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TextResponse {
    /// Numeric ids serialize as numbers, named ids as strings.
    #[schema(value_type = Value)]
    pub text_id: TextId,
    pub text: String,
}

/// Scored sentences of a stored text, in document order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SentencesResponse {
    #[schema(value_type = Value)]
    pub text_id: TextId,
    pub sentences: Vec<ScoredSentence>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /texts - List all stored texts.
#[utoipa::path(
    get,
    path = "/texts",
    responses(
        (status = 200, description = "Map of text id to content", body = BTreeMap<String, String>),
    ),
    tag = "texts"
)]
pub async fn list_texts_handler(State(state): State<AppState>) -> Json<BTreeMap<TextId, String>> {
    Json(state.store.list())
}

/// POST /texts - Store a text under the next free numeric id.
#[utoipa::path(
    post,
    path = "/texts",
    request_body = StoreTextRequest,
    responses(
        (status = 200, description = "Text stored", body = TextResponse),
    ),
    tag = "texts"
)]
pub async fn create_text_handler(
    State(state): State<AppState>,
    Json(request): Json<StoreTextRequest>,
) -> Json<TextResponse> {
    let text_id = state.store.insert(None, request.text.clone());
    info!(text_id = %text_id, bytes = request.text.len(), "Text created");
    Json(TextResponse {
        text_id,
        text: request.text,
    })
}

/// POST /texts/{id} - Store a text under an explicit id, replacing any existing one.
#[utoipa::path(
    post,
    path = "/texts/{id}",
    params(
        ("id" = String, Path, description = "Text ID"),
    ),
    request_body = StoreTextRequest,
    responses(
        (status = 200, description = "Text stored", body = TextResponse),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
    ),
    tag = "texts"
)]
pub async fn store_text_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(request): Json<StoreTextRequest>,
) -> Result<Json<TextResponse>, ServerError> {
    let id = TextId::parse(&raw_id)?;
    let text_id = state.store.insert(Some(id), request.text.clone());
    info!(text_id = %text_id, bytes = request.text.len(), "Text stored");
    Ok(Json(TextResponse {
        text_id,
        text: request.text,
    }))
}

/// GET /texts/{id} - Fetch one text.
#[utoipa::path(
    get,
    path = "/texts/{id}",
    params(
        ("id" = String, Path, description = "Text ID"),
    ),
    responses(
        (status = 200, description = "The text, or a not-found message", body = TextResponse),
        (status = 404, description = "Text not found (strict mode)", body = crate::error::ErrorResponse),
    ),
    tag = "texts"
)]
pub async fn get_text_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ServerError> {
    let id = TextId::parse(&raw_id)?;
    match state.store.get(&id) {
        Some(text) => Ok(Json(TextResponse { text_id: id, text }).into_response()),
        None => missing_text(&state, &id),
    }
}

/// DELETE /texts/{id} - Delete a text.
#[utoipa::path(
    delete,
    path = "/texts/{id}",
    params(
        ("id" = String, Path, description = "Text ID"),
    ),
    responses(
        (status = 200, description = "Deleted, or a not-found message", body = MessageResponse),
        (status = 404, description = "Text not found (strict mode)", body = crate::error::ErrorResponse),
    ),
    tag = "texts"
)]
pub async fn delete_text_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ServerError> {
    let id = TextId::parse(&raw_id)?;
    match state.store.delete(&id) {
        DeleteOutcome::Deleted => {
            info!(text_id = %id, "Text deleted");
            Ok(Json(MessageResponse {
                message: format!("Text with ID {id} deleted successfully"),
            })
            .into_response())
        }
        DeleteOutcome::NotFound => missing_text(&state, &id),
    }
}

/// GET /texts/{id}/sentences - Score every sentence of a stored text.
#[utoipa::path(
    get,
    path = "/texts/{id}/sentences",
    params(
        ("id" = String, Path, description = "Text ID"),
    ),
    responses(
        (status = 200, description = "Sentences in document order", body = SentencesResponse),
        (status = 404, description = "Text not found (strict mode)", body = crate::error::ErrorResponse),
    ),
    tag = "texts"
)]
pub async fn sentences_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ServerError> {
    let id = TextId::parse(&raw_id)?;
    let Some(text) = state.store.get(&id) else {
        return missing_text(&state, &id);
    };

    let summarizer = state.summarizer.clone();
    let scored = run_blocking(move || summarizer.analyze(&text)).await?;

    Ok(Json(SentencesResponse {
        text_id: id,
        sentences: scored,
    })
    .into_response())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
