//! Configuration module for rcgrab
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting defaults to the production deployment value, so the
//! binary runs without any configuration file at all.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DeviceProfile, DownloadConfig, FetchConfig, ResolverConfig, MOBILE_USER_AGENT,
    VALIDATION_ENDPOINT,
};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
