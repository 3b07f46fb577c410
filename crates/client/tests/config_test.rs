use std::collections::HashMap;

use availability_client::{HttpScheduleApi, config::ClientConfig};
use availability_core::models::preferences::Preferences;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ClientConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ClientConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[("AVAILABILITY_API_URL", "https://homes.example/api")]).unwrap();

    assert_eq!(config.base_url, "https://homes.example/api");
    assert_eq!(config.api_token, None);
    assert_eq!(config.schedule_path, "agent-time-schedule");
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.preferences, Preferences::new(60, 0));
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_missing_base_url() {
    let err = config_from(&[]).unwrap_err();
    assert!(err.to_string().contains("AVAILABILITY_API_URL"));
}

#[test]
fn test_invalid_meeting_duration() {
    let err = config_from(&[
        ("AVAILABILITY_API_URL", "https://homes.example/api"),
        ("MEETING_DURATION_MINUTES", "an hour"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("MEETING_DURATION_MINUTES"));
}

#[test]
fn test_custom_values() {
    let config = config_from(&[
        ("AVAILABILITY_API_URL", "https://homes.example/api/"),
        ("AVAILABILITY_API_TOKEN", "secret"),
        ("AVAILABILITY_SCHEDULE_PATH", "/agent/schedule"),
        ("AVAILABILITY_REQUEST_TIMEOUT_SECONDS", "5"),
        ("MEETING_DURATION_MINUTES", "30"),
        ("BUFFER_TIME_MINUTES", "15"),
        ("LOG_LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.preferences, Preferences::new(30, 15));
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.schedule_url(), "https://homes.example/api/agent/schedule");
}

#[rstest]
#[case("", None)]
#[case("token", Some("token"))]
fn test_empty_token_is_ignored(#[case] token: &str, #[case] expected: Option<&str>) {
    let config = config_from(&[
        ("AVAILABILITY_API_URL", "https://homes.example/api"),
        ("AVAILABILITY_API_TOKEN", token),
    ])
    .unwrap();
    assert_eq!(config.api_token.as_deref(), expected);
}

#[test]
fn test_http_api_uses_schedule_url() {
    let config = config_from(&[("AVAILABILITY_API_URL", "https://homes.example/api")]).unwrap();
    let api = HttpScheduleApi::new(&config).unwrap();
    assert_eq!(api.schedule_url(), "https://homes.example/api/agent-time-schedule");
}
