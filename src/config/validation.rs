use crate::config::types::DetectorConfig;
use crate::ConfigError;

/// Validates a configuration, returning the first problem found
///
/// # Validation Rules
///
/// * `timeout-secs` must be greater than zero
/// * `max-read-bytes` must be greater than zero
/// * `similarity-threshold` must be within [0.0, 1.0]
/// * `probe-token-length` must be greater than zero
///
/// `max-redirects` may be zero: that disables redirect following entirely,
/// which is a legitimate (if strict) setting.
pub fn validate(config: &DetectorConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than zero".to_string(),
        ));
    }

    if config.max_read_bytes == 0 {
        return Err(ConfigError::Validation(
            "max-read-bytes must be greater than zero".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&config.similarity_threshold) {
        return Err(ConfigError::Validation(format!(
            "similarity-threshold must be within [0.0, 1.0], got {}",
            config.similarity_threshold
        )));
    }

    if config.probe_token_length == 0 {
        return Err(ConfigError::Validation(
            "probe-token-length must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
