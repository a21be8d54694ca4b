//! Dead-page classification
//!
//! The heart of the crate: fetch the target, fetch a synthesized sibling
//! that cannot exist, and decide from redirect behavior and content
//! similarity whether the target is a real page or a soft 404.

use crate::config::DetectorConfig;
use crate::fetch::{build_http_client, walk};
use crate::probe::{build_probe_url, RandomTokens, TokenSource};
use crate::similarity::almost_identical;
use crate::url::url_path;
use crate::Result;
use reqwest::Client;

/// A configured dead-page detector
///
/// Holds the HTTP client and configuration for repeated classification
/// calls. Each call is independent: nothing is cached or remembered
/// between calls, and calls never run network requests concurrently.
pub struct Detector {
    client: Client,
    config: DetectorConfig,
    tokens: Box<dyn TokenSource + Send + Sync>,
}

impl Detector {
    /// Creates a detector with the given configuration
    pub fn new(config: DetectorConfig) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self {
            client,
            config,
            tokens: Box::new(RandomTokens),
        })
    }

    /// Creates a detector with an explicit token source
    ///
    /// Probe URLs are inherently random; tests substitute a deterministic
    /// source here to get reproducible fixtures.
    pub fn with_token_source(
        config: DetectorConfig,
        tokens: Box<dyn TokenSource + Send + Sync>,
    ) -> Result<Self> {
        let client = build_http_client(&config)?;
        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// Classifies `url` as dead (true) or alive (false)
    ///
    /// Network failures never surface as errors; they fold into the
    /// verdict. The only error is a structurally invalid `url`.
    ///
    /// # Decision Tree
    ///
    /// 1. Target chain walk hard-fails → dead (hard 404 or unreachable)
    /// 2. Build the probe URL: target's parent + random token
    /// 3. Probe hard-fails → alive (the host gives honest hard 404s, and
    ///    the target fetch succeeded)
    /// 4. Target path is `/` → alive (a site root is never a soft 404,
    ///    by policy)
    /// 5. Redirect counts differ → alive (divergent handling)
    /// 6. Final URLs are equal → dead (both funnel to the same page)
    /// 7. Bodies are almost identical → dead (indistinguishable from a
    ///    known-nonexistent page)
    /// 8. Otherwise → alive
    ///
    /// Steps 4 and 5 run before any content comparison; they are cheap
    /// short-circuits.
    pub async fn is_dead(&self, url: &str) -> Result<bool> {
        // Validate the URL up front: this is the one caller error that
        // propagates, and it also covers step 4 later.
        let path = url_path(url)?;

        let target = walk(&self.client, url, &self.config).await;
        let (target_body, target_final) = match (target.body, target.final_url) {
            (Some(body), Some(final_url)) => (body, final_url),
            _ => {
                tracing::debug!(url, "target fetch hard-failed");
                return Ok(true); // hard 404 (or other error)
            }
        };

        // The probe is a known dead page to compare against
        let probe_url = build_probe_url(url, self.config.probe_token_length, self.tokens.as_ref())?;
        tracing::debug!(url, probe = %probe_url, "fetching probe");

        let probe = walk(&self.client, &probe_url, &self.config).await;
        let (probe_body, probe_final) = match (probe.body, probe.final_url) {
            (Some(body), Some(final_url)) => (body, final_url),
            _ => return Ok(false), // host returns hard 404s for dead pages
        };

        if path == "/" {
            return Ok(false); // a root can't be a soft 404
        }

        if target.redirects != probe.redirects {
            return Ok(false); // different redirect behavior
        }

        if target_final == probe_final {
            return Ok(true); // same destination after the same hops
        }

        let target_text = String::from_utf8_lossy(&target_body);
        let probe_text = String::from_utf8_lossy(&probe_body);
        if almost_identical(
            &target_text,
            &probe_text,
            self.config.similarity_threshold,
        ) {
            return Ok(true); // content-indistinguishable from an error page
        }

        Ok(false)
    }
}

/// Classifies `url` with the default configuration
///
/// Convenience wrapper that builds a one-shot [`Detector`]. Callers that
/// classify many URLs should build a `Detector` once and reuse it.
pub async fn is_dead(url: &str) -> Result<bool> {
    Detector::new(DetectorConfig::default())?.is_dead(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_builds_with_defaults() {
        assert!(Detector::new(DetectorConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let detector = Detector::new(DetectorConfig::default()).unwrap();
        assert!(detector.is_dead("not a url").await.is_err());
    }

    // The decision tree itself is exercised end-to-end against a mock
    // server in tests/detector_tests.rs.
}
