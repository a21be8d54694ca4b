use reqwest::{header, Client, Response};
use url::Url;

/// Result of a single HTTP GET with redirect-following disabled
///
/// Redirect responses are a distinct variant rather than an error or an
/// auto-followed hop, so the chain walk can count hops and detect loops.
#[derive(Debug)]
pub enum HopOutcome {
    /// 2xx response; body capped at the configured read limit
    Success { body: Vec<u8> },

    /// 3xx response with a Location header
    ///
    /// Some servers attach a body to redirects; it is kept, not discarded.
    /// `location` is resolved to an absolute URL.
    Redirect { body: Vec<u8>, location: String },

    /// Anything else: 4xx/5xx, a 3xx without a usable Location, a network
    /// or protocol error, or a timeout
    Failure,
}

/// Performs one GET request against `url` without following redirects
///
/// The body read is capped at `max_read_bytes`; longer bodies are
/// truncated, not rejected. Every outcome either fully consumes or drops
/// the response stream, so no connection is leaked on any branch.
pub async fn fetch_once(client: &Client, url: &str, max_read_bytes: usize) -> HopOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url, error = %e, "request failed");
            return HopOutcome::Failure;
        }
    };

    let status = response.status();

    if status.is_redirection() {
        let location = match redirect_target(&response, url) {
            Some(location) => location,
            None => {
                tracing::debug!(url, status = status.as_u16(), "redirect without location");
                return HopOutcome::Failure;
            }
        };

        // A failed body read on a redirect is harmless; the body is only
        // advisory and the hop still advances the chain.
        let body = read_capped(response, max_read_bytes)
            .await
            .unwrap_or_default();
        return HopOutcome::Redirect { body, location };
    }

    if status.is_success() {
        return match read_capped(response, max_read_bytes).await {
            Ok(body) => HopOutcome::Success { body },
            Err(e) => {
                tracing::debug!(url, error = %e, "body read failed");
                HopOutcome::Failure
            }
        };
    }

    tracing::debug!(url, status = status.as_u16(), "non-success response");
    HopOutcome::Failure
}

/// Extracts and resolves the Location header of a redirect response
fn redirect_target(response: &Response, current_url: &str) -> Option<String> {
    let location = response
        .headers()
        .get(header::LOCATION)?
        .to_str()
        .ok()?
        .to_string();

    // Location may be relative; resolve it against the current URL
    let base = Url::parse(current_url).ok()?;
    let resolved = base.join(&location).ok()?;
    Some(resolved.to_string())
}

/// Reads at most `cap` bytes of the response body, truncating the rest
async fn read_capped(mut response: Response, cap: usize) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = cap - body.len();
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
