use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Missing sections and fields fall back to the deployment defaults, so a
/// partial override file is valid.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_partial_override() {
        let config_content = r#"
[fetch]
request-timeout = 15

[download]
dest-path = "/tmp/shows"
skip-converter = true
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.request_timeout, 15);
        // Untouched fields keep their defaults
        assert_eq!(config.fetch.connect_timeout, 10);
        assert_eq!(config.download.dest_path, "/tmp/shows");
        assert!(config.download.skip_converter);
        assert_eq!(config.resolver.profile.app_code, "medianet");
    }

    #[test]
    fn test_load_profile_override() {
        let config_content = r#"
[resolver]
endpoint = "https://validation.test/v1"

[resolver.profile]
device-type = "android"
app-code = "toutv"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.resolver.endpoint, "https://validation.test/v1");
        assert_eq!(config.resolver.profile.device_type, "android");
        assert_eq!(config.resolver.profile.app_code, "toutv");
        assert_eq!(config.resolver.profile.connection_type, "broadband");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[download]
intake-capacity = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
