//! OpenAPI documentation configuration.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{MessageResponse, health, summarize, texts};
use crate::error::ErrorResponse;

/// OpenAPI documentation for the gist API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "gist API",
        description = "Text storage and extractive summarization",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Local server"),
    ),
    paths(
        // Health
        health::health,
        // Texts
        texts::list_texts_handler,
        texts::create_text_handler,
        texts::store_text_handler,
        texts::get_text_handler,
        texts::delete_text_handler,
        texts::sentences_handler,
        // Summarize
        summarize::summarize_stored_handler,
        summarize::summarize_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            health::HealthResponse,
            texts::StoreTextRequest,
            texts::TextResponse,
            gist_core::ScoredSentence,
            texts::SentencesResponse,
            summarize::SummarizeRequest,
            summarize::SummaryResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "texts", description = "Text storage"),
        (name = "summarize", description = "Extractive summaries"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi())
}
