//! HTTP API server for gist.
//!
//! Exposes the text store and the summarizer over JSON.
//!
//! # Features
//!
//! - Text CRUD under `/texts`
//! - Summaries under `/summarize`
//! - Global rate limiting and request logging
//! - OpenAPI document and Swagger UI under `/api`
//!
//! # Example
//!
//! ```ignore
//! use gist_server::{AppState, Server, ServerConfig};
//!
//! let config = ServerConfig::new().with_bind_address("127.0.0.1:8080".parse()?);
//! let server = Server::new(AppState::with_samples(config));
//! server.run().await?;
//! ```

pub mod config;
pub mod error;
pub mod ratelimit;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, Result, ServerError};
pub use ratelimit::{create_rate_limiter, rate_limit_middleware, request_logging_middleware};
pub use routes::{MessageResponse, SummarizeRequest, SummaryResponse, TextResponse};
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The gist HTTP server.
pub struct Server {
    /// Application state.
    state: AppState,
}

impl Server {
    /// Create a server from application state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        use axum::routing::{get, post};

        let mut router = Router::new()
            .merge(routes::health_routes())
            .route(
                "/texts",
                get(routes::list_texts_handler).post(routes::create_text_handler),
            )
            .route(
                "/texts/{id}",
                get(routes::get_text_handler)
                    .post(routes::store_text_handler)
                    .delete(routes::delete_text_handler),
            )
            .route("/texts/{id}/sentences", get(routes::sentences_handler))
            .route("/summarize", post(routes::summarize_handler))
            .route("/summarize/{id}", post(routes::summarize_stored_handler))
            .layer(DefaultBodyLimit::max(self.state.config.max_body_size))
            // Request logging (inner layer, runs first)
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                ratelimit::request_logging_middleware,
            ))
            // Rate limiting (outer layer, runs before request logging)
            .layer(middleware::from_fn_with_state(
                self.state.clone(),
                ratelimit::rate_limit_middleware,
            ))
            .with_state(self.state.clone())
            .merge(routes::openapi::swagger_ui());

        if let Some(cors) = self.cors_layer() {
            router = router.layer(cors);
        }

        // TraceLayer for detailed HTTP tracing
        router.layer(TraceLayer::new_for_http())
    }

    /// CORS for the configured origins, if any parse.
    fn cors_layer(&self) -> Option<CorsLayer> {
        let origins: Vec<HeaderValue> = self
            .state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            return None;
        }

        Some(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
    }

    /// Run on the configured address until Ctrl+C.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_address;
        self.run_on(addr).await
    }

    /// Run on a specific address until Ctrl+C.
    pub async fn run_on(self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Internal(format!("Failed to read local address: {}", e)))?;
        let router = self.router();

        info!(addr = %addr, texts = self.state.store.len(), "Starting server");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.state.config.bind_address
    }
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C; shutting down");
        return;
    }
    info!("Shutdown signal received");
}
