//! Configuration types mapping to the TOML schema.
//!
//! ```toml
//! [server]        # listener, limits, middleware
//! [summarizer]    # summary length
//! [store]         # initial store contents
//! [nlp]           # rule-based pipeline switches
//! ```

use serde::Deserialize;

use crate::{ConfigError, Result};

/// Built-in defaults shared by the config sections and the binary.
pub mod defaults {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_BIND: &str = "127.0.0.1";
    pub const REQUESTS_PER_MINUTE: u32 = 120;
    pub const MAX_BODY_SIZE: usize = 1_048_576; // 1MB
    pub const SUMMARY_SENTENCES: usize = 2;
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level Config
// ─────────────────────────────────────────────────────────────────────────────

/// Root configuration structure.
///
/// All sections are optional so that partial configs (e.g., project-local
/// overrides) can be loaded and merged. Unknown sections are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    /// HTTP server configuration.
    pub server: Option<ServerConfig>,

    /// Summarizer configuration.
    pub summarizer: Option<SummarizerConfig>,

    /// Text store configuration.
    pub store: Option<StoreConfig>,

    /// NLP pipeline configuration.
    pub nlp: Option<NlpSection>,
}

impl GistConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Merge another config on top of this one (other takes priority).
    ///
    /// Sections are replaced wholesale, not field by field.
    pub fn merge(&mut self, other: GistConfig) {
        if other.server.is_some() {
            self.server = other.server;
        }

        if other.summarizer.is_some() {
            self.summarizer = other.summarizer;
        }

        if other.store.is_some() {
            self.store = other.store;
        }

        if other.nlp.is_some() {
            self.nlp = other.nlp;
        }
    }

    /// Server section, or defaults.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// Summarizer section, or defaults.
    pub fn summarizer(&self) -> SummarizerConfig {
        self.summarizer.clone().unwrap_or_default()
    }

    /// Store section, or defaults.
    pub fn store(&self) -> StoreConfig {
        self.store.clone().unwrap_or_default()
    }

    /// NLP section, or defaults.
    pub fn nlp(&self) -> NlpSection {
        self.nlp.clone().unwrap_or_default()
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        let server = self.server();
        if server.rate_limiting && server.api_rpm == 0 {
            return Err(invalid(
                "server.api_rpm",
                "must be greater than zero when rate limiting is enabled",
            ));
        }
        if server.max_body_size == 0 {
            return Err(invalid("server.max_body_size", "must be greater than zero"));
        }
        if self.summarizer().default_sentences == 0 {
            return Err(invalid(
                "summarizer.default_sentences",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Address to bind to.
    pub bind: String,
    /// Enable rate limiting.
    pub rate_limiting: bool,
    /// API rate limit: requests per minute.
    pub api_rpm: u32,
    /// Enable request logging.
    pub request_logging: bool,
    /// Report missing texts with 404 instead of 200 and a message.
    pub strict_status: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
    /// Allowed CORS origins. Empty disables CORS.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: defaults::DEFAULT_PORT,
            bind: defaults::DEFAULT_BIND.to_string(),
            rate_limiting: true,
            api_rpm: defaults::REQUESTS_PER_MINUTE,
            request_logging: true,
            strict_status: false,
            max_body_size: defaults::MAX_BODY_SIZE,
            cors_origins: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Summarizer / Store / NLP
// ─────────────────────────────────────────────────────────────────────────────

/// Summarizer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Sentences per summary when the request does not specify a count.
    pub default_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            default_sentences: defaults::SUMMARY_SENTENCES,
        }
    }
}

/// Text store configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Preload the bundled sample texts on startup.
    pub load_samples: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { load_samples: true }
    }
}

/// NLP pipeline configuration (`[nlp]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NlpSection {
    /// Count numbers as named entities.
    pub numeric_entities: bool,
}

impl Default for NlpSection {
    fn default() -> Self {
        Self {
            numeric_entities: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
