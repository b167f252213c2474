//! Application state shared across handlers.

use std::sync::Arc;

use gist_core::{MemoryTextStore, Summarizer, TextRepository};
use gist_nlp::RuleBasedPipeline;

use crate::config::ServerConfig;
use crate::ratelimit::{SharedRateLimiter, create_rate_limiter};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Text storage.
    pub store: Arc<dyn TextRepository>,

    /// Sentence ranking and summarization.
    pub summarizer: Summarizer,

    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Global request limiter (None when rate limiting is disabled).
    pub limiter: Option<SharedRateLimiter>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        store: Arc<dyn TextRepository>,
        summarizer: Summarizer,
        config: ServerConfig,
    ) -> Self {
        let limiter = config
            .rate_limiting
            .then(|| create_rate_limiter(config.api_rpm));

        Self {
            store,
            summarizer,
            config: Arc::new(config),
            limiter,
        }
    }

    /// State with the sample texts and the rule-based pipeline.
    pub fn with_samples(config: ServerConfig) -> Self {
        Self::new(
            Arc::new(MemoryTextStore::with_samples()),
            Summarizer::new(Arc::new(RuleBasedPipeline::new())),
            config,
        )
    }
}
