//! Probe URL construction
//!
//! The detector compares the target page against a sibling URL that is
//! near-certain not to exist: the target's parent directory plus a long
//! random lowercase token. Token generation sits behind the [`TokenSource`]
//! trait so tests can substitute a deterministic source.

use crate::url::parent_url;
use crate::Result;
use rand::{thread_rng, Rng};

/// A source of random path tokens
///
/// The default implementation is [`RandomTokens`]; tests inject a fixed
/// source to get reproducible probe URLs.
pub trait TokenSource {
    /// Returns a string of `len` lowercase Latin letters
    fn token(&self, len: usize) -> String;
}

/// Token source backed by the thread-local RNG
///
/// Uniform over `a..=z`; with the default length of 25 the chance of
/// colliding with a real path is about 26⁻²⁵. Not cryptographic, and does
/// not need to be.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn token(&self, len: usize) -> String {
        let mut rng = thread_rng();
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }
}

/// Builds the probe URL for `target`: parent directory + fresh token
///
/// Fails only if `target` is not a valid absolute URL.
pub fn build_probe_url(target: &str, token_len: usize, source: &dyn TokenSource) -> Result<String> {
    let parent = parent_url(target)?;
    Ok(format!("{}{}", parent, source.token(token_len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let token = RandomTokens.token(25);
        assert_eq!(token.len(), 25);
        assert!(token.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_independent_tokens_differ() {
        // Collision probability is 26^-25; a failure here means the RNG
        // is broken, not that we got unlucky.
        let a = RandomTokens.token(25);
        let b = RandomTokens.token(25);
        assert_ne!(a, b);
    }

    #[test]
    fn test_probe_url_uses_parent_directory() {
        struct Fixed;
        impl TokenSource for Fixed {
            fn token(&self, len: usize) -> String {
                "x".repeat(len)
            }
        }

        let probe = build_probe_url("http://site.com/one/two", 5, &Fixed).unwrap();
        assert_eq!(probe, "http://site.com/one/xxxxx");

        let probe = build_probe_url("http://site.com", 5, &Fixed).unwrap();
        assert_eq!(probe, "http://site.com/xxxxx");
    }

    #[test]
    fn test_probe_url_rejects_malformed_target() {
        assert!(build_probe_url("not a url", 25, &RandomTokens).is_err());
    }
}
