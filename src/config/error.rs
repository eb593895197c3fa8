//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Public origin must be an http(s) URL")]
    InvalidPublicOrigin,

    #[error("Public origin must use HTTPS in production")]
    PublicOriginMustBeHttps,

    #[error("Simulated latency exceeds maximum allowed (10000 ms)")]
    LatencyTooLarge,

    #[error("Invalid EmailJS API URL")]
    InvalidEmailApiUrl,
}
