use crate::config::types::DetectorConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(DetectorConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use soft404::config::load_config;
///
/// let config = load_config(Path::new("soft404.toml")).unwrap();
/// println!("Max redirects: {}", config.max_redirects);
/// ```
pub fn load_config(path: &Path) -> Result<DetectorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: DetectorConfig = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            timeout-secs = 5
            max-read-bytes = 1024
            max-redirects = 3
            similarity-threshold = 0.9
            probe-token-length = 12
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_read_bytes, 1024);
        assert_eq!(config.max_redirects, 3);
        assert_eq!(config.similarity_threshold, 0.9);
        assert_eq!(config.probe_token_length, 12);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.similarity_threshold, 0.95);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("timeout-secs = [not toml");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_invalid_values() {
        let file = write_config("similarity-threshold = 1.5");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Path::new("/nonexistent/soft404.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
