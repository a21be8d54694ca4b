//! HTTP fetching for the detector
//!
//! This module performs all network traffic, including:
//! - Building an HTTP client with redirect-following disabled
//! - Single-hop GET requests with a capped body read
//! - A manual chain walk over redirect responses with loop detection
//!
//! Redirects are handled manually on purpose: the classifier needs to see
//! the number of redirect hops and the final URL, which an auto-following
//! client would hide.

mod chain;
mod client;
mod hop;

pub use chain::{walk, FetchOutcome};
pub use client::build_http_client;
pub use hop::{fetch_once, HopOutcome};
