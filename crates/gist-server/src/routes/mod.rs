//! API routes.

pub mod health;
pub mod openapi;
pub mod summarize;
pub mod texts;

pub use health::{HealthResponse, health_routes};
pub use summarize::{
    SummarizeRequest, SummaryResponse, summarize_handler, summarize_stored_handler,
};
pub use texts::{
    SentencesResponse, StoreTextRequest, TextResponse, create_text_handler,
    delete_text_handler, get_text_handler, list_texts_handler, sentences_handler,
    store_text_handler,
};

use axum::{Json, response::IntoResponse, response::Response};
use gist_core::TextId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ServerError;
use crate::state::AppState;

/// Body of responses that only carry a message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn not_found_message(id: &TextId) -> String {
    format!("Text with ID {id} not found")
}

/// Missing text: 200 with a message, or 404 in strict mode.
pub(crate) fn missing_text(state: &AppState, id: &TextId) -> Result<Response, ServerError> {
    let message = not_found_message(id);
    if state.config.strict_status {
        return Err(ServerError::NotFound(message));
    }
    Ok(Json(MessageResponse { message }).into_response())
}

/// Run CPU-bound NLP work off the async workers.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ServerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServerError::Internal(format!("Background task failed: {e}")))
}
