use serde::Deserialize;
use std::time::Duration;

/// Detector configuration
///
/// Every field has a default matching the classic soft-404 heuristics, so a
/// config file only needs to name the values it changes.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorConfig {
    /// Timeout applied to every HTTP request the detector makes (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of response body bytes read per request; longer
    /// bodies are truncated, not rejected
    #[serde(rename = "max-read-bytes", default = "default_max_read_bytes")]
    pub max_read_bytes: usize,

    /// Maximum number of redirect hops followed in one chain walk
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Similarity ratio at or above which two pages count as identical
    #[serde(
        rename = "similarity-threshold",
        default = "default_similarity_threshold"
    )]
    pub similarity_threshold: f64,

    /// Length of the random lowercase token appended to the probe URL
    #[serde(rename = "probe-token-length", default = "default_probe_token_length")]
    pub probe_token_length: usize,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_read_bytes() -> usize {
    64 * 1024
}

fn default_max_redirects() -> u32 {
    10
}

fn default_similarity_threshold() -> f64 {
    0.95
}

fn default_probe_token_length() -> usize {
    25
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_read_bytes: default_max_read_bytes(),
            max_redirects: default_max_redirects(),
            similarity_threshold: default_similarity_threshold(),
            probe_token_length: default_probe_token_length(),
        }
    }
}

impl DetectorConfig {
    /// The request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_read_bytes, 65536);
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.similarity_threshold, 0.95);
        assert_eq!(config.probe_token_length, 25);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DetectorConfig = toml::from_str("timeout-secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.max_read_bytes, 65536);
    }

    #[test]
    fn test_timeout_duration() {
        let config = DetectorConfig {
            timeout_secs: 3,
            ..DetectorConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
