use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

pub const FORECAST_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/forecast";
pub const FORECAST_LOCATION: &str = "Toronto,Canada";
pub const STORAGE_BUCKET: &str = "etls3glueredshift";
pub const STORAGE_KEY: &str = "raw/weather_api_data.csv";

#[derive(Deserialize)]
pub struct ForecastParameters {
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
pub struct StorageParameters {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_key")]
    pub key: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    #[serde(default)]
    pub allow_http: bool,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RetryParameters {
    pub retries: u32,
    pub delay_secs: u64,
}

impl Default for RetryParameters {
    fn default() -> Self {
        Self {
            retries: 2,
            delay_secs: 300,
        }
    }
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub forecast: ForecastParameters,
    pub storage: StorageParameters,
    #[serde(default)]
    pub retry: RetryParameters,
    pub general: General,
}

fn default_endpoint() -> String { FORECAST_ENDPOINT.to_string() }
fn default_location() -> String { FORECAST_LOCATION.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_bucket() -> String { STORAGE_BUCKET.to_string() }
fn default_key() -> String { STORAGE_KEY.to_string() }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, LoadConfigurationError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates configuration given as a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)?;

    if config.forecast.api_key.trim().is_empty() {
        return Err(LoadConfigurationError::MissingValue("forecast.api_key".into()));
    }
    if config.storage.bucket.is_empty() || config.storage.key.is_empty() {
        return Err(LoadConfigurationError::MissingValue("storage.bucket/storage.key".into()));
    }

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("FileReadError: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("ParseError: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("MissingValue: {0}")]
    MissingValue(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use super::*;

    const FULL: &str = r#"
[forecast]
api_key = "secret"
location = "Oslo,Norway"
timeout_secs = 10

[storage]
bucket = "other-bucket"
key = "raw/other.csv"
region = "eu-north-1"
allow_http = true

[retry]
retries = 5
delay_secs = 1

[general]
log_path = "/tmp/"
log_level = "debug"
log_to_stdout = false
"#;

    const MINIMAL: &str = r#"
[forecast]
api_key = "secret"

[storage]

[general]
log_path = "/tmp/"
log_level = "info"
log_to_stdout = true
"#;

    #[test]
    fn minimal_config_falls_back_to_fixed_pipeline_values() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.forecast.endpoint, FORECAST_ENDPOINT);
        assert_eq!(config.forecast.location, FORECAST_LOCATION);
        assert_eq!(config.forecast.timeout_secs, 30);
        assert_eq!(config.storage.bucket, STORAGE_BUCKET);
        assert_eq!(config.storage.key, STORAGE_KEY);
        assert!(config.storage.region.is_none());
        assert!(!config.storage.allow_http);
        assert_eq!(config.retry, RetryParameters { retries: 2, delay_secs: 300 });
        assert_eq!(config.general.log_level, LevelFilter::Info);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = parse_config(FULL).unwrap();

        assert_eq!(config.forecast.location, "Oslo,Norway");
        assert_eq!(config.forecast.timeout_secs, 10);
        assert_eq!(config.storage.bucket, "other-bucket");
        assert_eq!(config.storage.key, "raw/other.csv");
        assert_eq!(config.storage.region.as_deref(), Some("eu-north-1"));
        assert!(config.storage.allow_http);
        assert_eq!(config.retry, RetryParameters { retries: 5, delay_secs: 1 });
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(!config.general.log_to_stdout);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let toml = MINIMAL.replace("api_key = \"secret\"", "api_key = \"  \"");

        match parse_config(&toml) {
            Err(LoadConfigurationError::MissingValue(v)) => assert_eq!(v, "forecast.api_key"),
            _ => panic!("expected missing value error"),
        }
    }

    #[test]
    fn missing_forecast_table_is_a_parse_error() {
        let toml = "[storage]\n[general]\nlog_path = \"/tmp/\"\nlog_level = \"info\"\nlog_to_stdout = true\n";

        assert!(matches!(parse_config(toml), Err(LoadConfigurationError::ParseError(_))));
    }

    #[test]
    fn loads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.forecast.api_key, "secret");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_config("/nonexistent/weather_pipeline.toml");
        assert!(matches!(result, Err(LoadConfigurationError::FileReadError(_))));
    }
}
