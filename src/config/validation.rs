use crate::config::types::{Config, DeviceProfile, DownloadConfig, FetchConfig, ResolverConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_resolver_config(&config.resolver)?;
    validate_download_config(&config.download)?;
    Ok(())
}

/// Validates fetch deadlines
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.request_timeout == 0 {
        return Err(ConfigError::Validation(
            "request-timeout must be greater than 0".to_string(),
        ));
    }

    if config.connect_timeout == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates the resolver endpoint and device profile
fn validate_resolver_config(config: &ResolverConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid resolver endpoint: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Resolver endpoint must use http or https, got '{}'",
            url.scheme()
        )));
    }

    validate_profile(&config.profile)
}

/// Validates that no profile field is empty
///
/// The validation API silently changes behavior on missing query options, so
/// an empty field is a configuration mistake, not a choice.
fn validate_profile(profile: &DeviceProfile) -> Result<(), ConfigError> {
    let fields = [
        ("connection-type", &profile.connection_type),
        ("output", &profile.output),
        ("device-type", &profile.device_type),
        ("app-code", &profile.app_code),
        ("user-agent", &profile.user_agent),
    ];

    for (name, value) in fields {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile {} cannot be empty",
                name
            )));
        }
    }

    Ok(())
}

/// Validates download job parameters
fn validate_download_config(config: &DownloadConfig) -> Result<(), ConfigError> {
    if config.dest_path.is_empty() {
        return Err(ConfigError::Validation(
            "dest-path cannot be empty".to_string(),
        ));
    }

    if config.filename.is_empty() {
        return Err(ConfigError::Validation(
            "filename cannot be empty".to_string(),
        ));
    }

    if config.intake_capacity == 0 {
        return Err(ConfigError::Validation(
            "intake-capacity must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let mut config = Config::default();
        config.fetch.request_timeout = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_malformed_endpoint_rejected() {
        let mut config = Config::default();
        config.resolver.endpoint = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = Config::default();
        config.resolver.endpoint = "ftp://validation.test/v1".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_profile_field_rejected() {
        let mut config = Config::default();
        config.resolver.profile.app_code = String::new();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("app-code"));
    }

    #[test]
    fn test_empty_dest_path_rejected() {
        let mut config = Config::default();
        config.download.dest_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_intake_capacity_rejected() {
        let mut config = Config::default();
        config.download.intake_capacity = 0;
        assert!(validate(&config).is_err());
    }
}
