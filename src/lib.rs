//! rcgrab: episode discovery and stream URL resolution for Radio-Canada shows
//!
//! This crate implements a three-stage resolution pipeline: discover episode
//! pages on a show page, extract the embedded player configuration from each
//! episode, and exchange the media identifier for a playable stream URL via
//! the media validation API. Resolved URLs are handed to an external download
//! engine through a bounded intake queue; the engine owns everything past
//! acceptance (segment retrieval, retries, file assembly).

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod state;

use thiserror::Error;

/// Main error type for rcgrab operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {code} for {url}")]
    Status { url: String, code: u16 },

    #[error("No element matching `{selector}` in {url}")]
    SelectorMiss { url: String, selector: String },

    #[error("Malformed player config in {url}: {source}")]
    PlayerConfig {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Player config in {url} carries no media identifier")]
    EmptyMediaId { url: String },

    #[error("Malformed validation response for media {id_media}: {source}")]
    Decode {
        id_media: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation API rejected media {id_media} (code {code}): {message}")]
    Api {
        id_media: String,
        code: i64,
        message: String,
    },

    #[error("No episodes discovered at {url}")]
    NoEpisodes { url: String },

    #[error("Download engine intake queue is closed")]
    QueueClosed,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for rcgrab operations
pub type Result<T> = std::result::Result<T, Error>;

// Re-export commonly used types
pub use config::{Config, DeviceProfile};
pub use engine::{intake_channel, DownloadJob, Intake, JobKind};
pub use pipeline::{Coordinator, ResolvedStream, RunSummary};
pub use state::{EpisodeState, Stage};
