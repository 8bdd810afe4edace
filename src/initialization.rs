use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::Forecast;
use crate::manager_storage::errors::StorageError;
use crate::manager_storage::Storage;

pub struct Mgr {
    pub forecast: Forecast,
    pub storage: Storage,
}

/// Initializes and returns configuration and a Mgr struct holding the extract and load managers
///
pub fn init() -> Result<(Config, Mgr), InitializationError> {
    let args: Vec<String> = env::args().collect();
    let config_path = config_path(&args)?;

    // Load configuration
    let config = load_config(config_path)?;

    // Setup logging
    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    // Print version
    info!("starting weather pipeline version: {}", env!("CARGO_PKG_VERSION"));

    let mgr = Mgr {
        forecast: Forecast::new(&config.forecast)?,
        storage: Storage::new(&config.storage)?,
    };

    Ok((config, mgr))
}

/// Picks the configuration file path out of the '--config=<path>' argument
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Result<&str, InitializationError> {
    args.iter()
        .find_map(|p| p.strip_prefix("--config="))
        .filter(|p| !p.is_empty())
        .ok_or(InitializationError::ArgumentError("missing --config=<path> argument".into()))
}

/// Error depicting errors that occur while initializing the pipeline
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("ForecastSetupError: {0}")]
    ForecastSetupError(#[from] ForecastError),
    #[error("StorageSetupError: {0}")]
    StorageSetupError(#[from] StorageError),
}
