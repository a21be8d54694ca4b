//! Soft404: a dead-page detector
//!
//! This crate classifies a URL as dead (a hard or soft 404) versus alive.
//! HTTP status codes alone are not enough: many servers answer 200 OK or a
//! redirect for content that no longer exists. The detector walks the
//! target's redirect chain manually, fetches a synthesized sibling URL that
//! is guaranteed not to exist, and compares the two responses.

pub mod config;
pub mod detector;
pub mod fetch;
pub mod probe;
pub mod similarity;
pub mod url;

use thiserror::Error;

/// Main error type for soft404 operations
///
/// Ordinary network failures never surface here; the classifier folds them
/// into the DEAD/ALIVE verdict. Only caller errors (a malformed URL, a bad
/// configuration) propagate.
#[derive(Debug, Error)]
pub enum Soft404Error {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("URL has no host: {url}")]
    MissingHost { url: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type alias for soft404 operations
pub type Result<T> = std::result::Result<T, Soft404Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::DetectorConfig;
pub use detector::{is_dead, Detector};
pub use fetch::{build_http_client, FetchOutcome, HopOutcome};
pub use probe::{build_probe_url, RandomTokens, TokenSource};
pub use similarity::almost_identical;
pub use url::{parent_url, url_path};
