use crate::config::DetectorConfig;
use crate::fetch::hop::{fetch_once, HopOutcome};
use reqwest::Client;
use std::collections::HashSet;

/// Terminal result of walking a redirect chain
///
/// `body = None` means the walk failed outright: a transport error, a
/// redirect loop, or too many redirects. Those cases are deliberately not
/// distinguished here; to the classifier they all mean "target unreachable
/// cleanly". `redirects` is the number of hops actually traversed before
/// termination, success or not.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Final page body, or `None` on hard failure
    pub body: Option<Vec<u8>>,
    /// URL the chain ended on; only meaningful when `body` is present
    pub final_url: Option<String>,
    /// Redirect hops traversed
    pub redirects: u32,
}

impl FetchOutcome {
    /// True if the walk failed without reaching a normal page
    pub fn is_failure(&self) -> bool {
        self.body.is_none()
    }

    fn failure(redirects: u32) -> Self {
        Self {
            body: None,
            final_url: None,
            redirects,
        }
    }
}

/// Walks the redirect chain starting at `url` to a terminal outcome
///
/// Each hop is a single non-following GET. The walk tracks every URL it
/// has visited in this chain; revisiting one means a redirect loop.
/// Termination rules:
///
/// 1. Hop failure → hard failure, redirect count so far
/// 2. Normal page → success, final URL = current URL
/// 3. Redirect to an already-visited URL → hard failure (loop)
/// 4. Redirect count at `max_redirects` → hard failure (limit)
/// 5. Otherwise advance to the redirect target and repeat
///
/// A chain of exactly `max_redirects` hops ending in a normal page still
/// succeeds; the limit rejects the hop after that.
pub async fn walk(client: &Client, url: &str, config: &DetectorConfig) -> FetchOutcome {
    let mut current = url.to_string();
    let mut redirects = 0u32;
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        visited.insert(current.clone());

        match fetch_once(client, &current, config.max_read_bytes).await {
            HopOutcome::Failure => {
                tracing::debug!(url = %current, redirects, "chain walk failed");
                return FetchOutcome::failure(redirects);
            }
            HopOutcome::Success { body } => {
                tracing::debug!(url = %current, redirects, "chain walk succeeded");
                return FetchOutcome {
                    body: Some(body),
                    final_url: Some(current),
                    redirects,
                };
            }
            HopOutcome::Redirect { body: _, location } => {
                if visited.contains(&location) {
                    tracing::debug!(url = %current, target = %location, "redirect loop");
                    return FetchOutcome::failure(redirects);
                }
                if redirects >= config.max_redirects {
                    tracing::debug!(url = %current, redirects, "too many redirects");
                    return FetchOutcome::failure(redirects);
                }
                current = location;
                redirects += 1;
            }
        }
    }
}

// Network-facing behavior (loop detection, the hop limit boundary, body
// truncation) is covered by the wiremock tests in tests/detector_tests.rs.
