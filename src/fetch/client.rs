use crate::config::DetectorConfig;
use reqwest::{redirect::Policy, Client};

/// Builds the HTTP client used for every request in one classification call
///
/// Redirect following is disabled at the transport level so the chain walk
/// can observe each hop. The configured timeout applies per request; it is
/// carried here explicitly rather than through any ambient global state, so
/// concurrent callers with different configurations never interfere.
///
/// # Arguments
///
/// * `config` - The detector configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &DetectorConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("soft404/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(config.timeout())
        .connect_timeout(config.timeout())
        .redirect(Policy::none()) // Handle redirects manually
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&DetectorConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_with_short_timeout() {
        let config = DetectorConfig {
            timeout_secs: 1,
            ..DetectorConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
