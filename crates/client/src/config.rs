//! # Client Configuration Module
//!
//! Loads settings for talking to the agent time-schedule API from environment
//! variables, with defaults where a sensible one exists.
//!
//! ## Environment Variables
//!
//! - `AVAILABILITY_API_URL`: Base URL of the schedule API (required)
//! - `AVAILABILITY_API_TOKEN`: Bearer token sent with every request
//! - `AVAILABILITY_SCHEDULE_PATH`: Path of the schedule endpoint (default: "agent-time-schedule")
//! - `AVAILABILITY_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `MEETING_DURATION_MINUTES`: Length of a bookable meeting (default: 60)
//! - `BUFFER_TIME_MINUTES`: Gap left between consecutive slots (default: 0)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;

use availability_core::models::preferences::Preferences;
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// Configuration for the schedule API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. "https://example.com/api"
    pub base_url: String,

    /// Bearer token for the agent session (optional)
    pub api_token: Option<String>,

    /// Path of the schedule endpoint relative to `base_url`
    pub schedule_path: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Booking preferences used when generating slots
    pub preferences: Preferences,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `AVAILABILITY_API_URL` is not set
    /// - `MEETING_DURATION_MINUTES` or `BUFFER_TIME_MINUTES` is not a number
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("AVAILABILITY_API_URL")
            .ok_or_else(|| eyre!("AVAILABILITY_API_URL environment variable must be set"))?;

        let api_token = lookup("AVAILABILITY_API_TOKEN").filter(|token| !token.is_empty());

        let schedule_path = lookup("AVAILABILITY_SCHEDULE_PATH")
            .unwrap_or_else(|| "agent-time-schedule".to_string());

        let request_timeout = lookup("AVAILABILITY_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let meeting_duration_minutes = lookup("MEETING_DURATION_MINUTES")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .wrap_err("Invalid MEETING_DURATION_MINUTES value")?;

        let buffer_time_minutes = lookup("BUFFER_TIME_MINUTES")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .wrap_err("Invalid BUFFER_TIME_MINUTES value")?;

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            base_url,
            api_token,
            schedule_path,
            request_timeout,
            preferences: Preferences::new(meeting_duration_minutes, buffer_time_minutes),
            log_level,
        })
    }

    /// Full URL of the schedule endpoint
    pub fn schedule_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.schedule_path.trim_start_matches('/')
        )
    }
}
