use serde::Deserialize;

/// Production media validation endpoint.
pub const VALIDATION_ENDPOINT: &str =
    "https://api.radio-canada.ca/validationMedia/v1/Validation.html";

/// Mobile-browser identification header sent with every validation request.
/// The API varies its response shape and content by declared device.
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; U; CPU iPhone OS 5_0 like Mac OS X; \
     en-us) AppleWebKit/532.9 (KHTML, like Gecko) Version/5.0.5 Mobile/8A293 Safari/6531.22.7";

/// Main configuration structure for rcgrab
///
/// Every field has a default matching the production deployment, so a TOML
/// file only needs to name what it overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub resolver: ResolverConfig,
    pub download: DownloadConfig,
}

/// Deadlines applied to every outbound request
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request deadline in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Connect-phase deadline in seconds
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}

/// Validation endpoint and negotiation profile
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL of the media validation endpoint
    pub endpoint: String,

    /// Device/negotiation profile sent with every validation request
    pub profile: DeviceProfile,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: VALIDATION_ENDPOINT.to_string(),
            profile: DeviceProfile::default(),
        }
    }
}

/// Fixed device/negotiation profile for validation requests
///
/// These are constants of the deployment, not per-call options. They live in
/// one named value so tests can substitute alternate profiles without
/// touching resolver logic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    #[serde(rename = "connection-type")]
    pub connection_type: String,

    /// Response format requested from the API
    pub output: String,

    /// Ask for every bitrate variant, not just one rendition
    pub multibitrate: bool,

    #[serde(rename = "device-type")]
    pub device_type: String,

    /// Application code identifying the calling client
    #[serde(rename = "app-code")]
    pub app_code: String,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            connection_type: "broadband".to_string(),
            output: "json".to_string(),
            multibitrate: true,
            device_type: "ipad".to_string(),
            app_code: "medianet".to_string(),
            user_agent: MOBILE_USER_AGENT.to_string(),
        }
    }
}

/// Job parameters handed to the download engine
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Destination directory passed along on every job
    #[serde(rename = "dest-path")]
    pub dest_path: String,

    /// Fallback filename stem for episodes whose URL has no usable slug
    pub filename: String,

    /// Ask the engine to skip its converter step
    #[serde(rename = "skip-converter")]
    pub skip_converter: bool,

    /// Capacity of the engine intake queue
    #[serde(rename = "intake-capacity")]
    pub intake_capacity: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dest_path: ".".to_string(),
            filename: "episode".to_string(),
            skip_converter: false,
            intake_capacity: 64,
        }
    }
}
