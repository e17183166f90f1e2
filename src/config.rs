//! Codec configuration.

use std::env;

use crate::error::Error;

/// Environment variable toggling client-side request validation.
pub const VALIDATE_REQUESTS_ENV: &str = "CODECOMMIT_VALIDATE_REQUESTS";

/// Environment variable toggling `trace!` dumps of request and response bodies.
pub const LOG_PAYLOADS_ENV: &str = "CODECOMMIT_LOG_PAYLOADS";

/// Settings for [`crate::codec::Codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Run [`crate::validation::Validate`] before encoding (default: true)
    pub validate_requests: bool,
    /// Emit full payloads at trace level (default: false). Payloads can carry
    /// file contents.
    pub log_payloads: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            validate_requests: true,
            log_payloads: false,
        }
    }
}

impl CodecConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `CODECOMMIT_VALIDATE_REQUESTS` - `true`/`false` (optional, default: true)
    /// * `CODECOMMIT_LOG_PAYLOADS` - `true`/`false` (optional, default: false)
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a variable is set to something other
    /// than a boolean.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` on a non-boolean value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let validate_requests = match lookup(VALIDATE_REQUESTS_ENV) {
            Some(value) => parse_flag(VALIDATE_REQUESTS_ENV, &value)?,
            None => defaults.validate_requests,
        };

        let log_payloads = match lookup(LOG_PAYLOADS_ENV) {
            Some(value) => parse_flag(LOG_PAYLOADS_ENV, &value)?,
            None => defaults.log_payloads,
        };

        Ok(Self {
            validate_requests,
            log_payloads,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, Error> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Configuration(format!(
            "Invalid {key}: {value:?}. Must be true or false"
        ))),
    }
}
