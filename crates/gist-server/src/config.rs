//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use gist_config::defaults;

use crate::error::{Result, ServerError};

/// Runtime server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,

    /// Enable rate limiting.
    pub rate_limiting: bool,

    /// Rate limit: requests per minute across all clients.
    pub api_rpm: u32,

    /// Enable request logging.
    pub request_logging: bool,

    /// Report missing texts as 404 instead of 200 with a message.
    pub strict_status: bool,

    /// Maximum request body size in bytes.
    pub max_body_size: usize,

    /// CORS allowed origins (empty = no CORS).
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(
                IpAddr::V4(Ipv4Addr::LOCALHOST),
                defaults::DEFAULT_PORT,
            ),
            rate_limiting: true,
            api_rpm: defaults::REQUESTS_PER_MINUTE,
            request_logging: true,
            strict_status: false,
            max_body_size: defaults::MAX_BODY_SIZE,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[server]` section of the config file.
    pub fn from_section(section: &gist_config::ServerConfig) -> Result<Self> {
        let ip: IpAddr = section.bind.parse().map_err(|e| {
            ServerError::Config(format!("invalid bind address '{}': {}", section.bind, e))
        })?;

        Ok(Self {
            bind_address: SocketAddr::new(ip, section.port),
            rate_limiting: section.rate_limiting,
            api_rpm: section.api_rpm,
            request_logging: section.request_logging,
            strict_status: section.strict_status,
            max_body_size: section.max_body_size,
            cors_origins: section.cors_origins.clone(),
        })
    }

    /// Set the bind address.
    pub fn with_bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = addr;
        self
    }

    /// Enable or disable rate limiting.
    pub fn with_rate_limiting(mut self, enabled: bool) -> Self {
        self.rate_limiting = enabled;
        self
    }

    /// Set the API rate limit (requests per minute).
    pub fn with_api_rpm(mut self, rpm: u32) -> Self {
        self.api_rpm = rpm;
        self
    }

    /// Enable or disable request logging.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.request_logging = enabled;
        self
    }

    /// Report missing texts with 404.
    pub fn with_strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Set the maximum REST request body size.
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Set CORS allowed origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_file_defaults() {
        let from_file = ServerConfig::from_section(&gist_config::ServerConfig::default()).unwrap();
        let default = ServerConfig::default();
        assert_eq!(from_file.bind_address, default.bind_address);
        assert_eq!(from_file.api_rpm, default.api_rpm);
        assert_eq!(from_file.max_body_size, default.max_body_size);
        assert!(!from_file.strict_status);
    }

    #[test]
    fn test_from_section_rejects_bad_bind() {
        let section = gist_config::ServerConfig {
            bind: "not-an-ip".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ServerConfig::from_section(&section),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = ServerConfig::new()
            .with_bind_address("0.0.0.0:9000".parse().unwrap())
            .with_rate_limiting(false)
            .with_strict_status(true)
            .with_max_body_size(64);

        assert_eq!(config.bind_address.port(), 9000);
        assert!(!config.rate_limiting);
        assert!(config.strict_status);
        assert_eq!(config.max_body_size, 64);
    }
}
