//! Configuration module for soft404
//!
//! The detector exposes five tunables (request timeout, response read cap,
//! redirect cap, similarity threshold, probe token length). They can be
//! loaded from a TOML file or used with their built-in defaults.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::DetectorConfig;
pub use validation::validate;
