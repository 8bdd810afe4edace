use thiserror::Error;
use crate::table::TableError;

/// Error depicting errors that occur while extracting a forecast
///
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("StatusError: {0}: {1}")]
    StatusError(u16, String),
    #[error("DocumentError: {0}")]
    DocumentError(#[from] serde_json::Error),
    #[error("MissingListError: response has no 'list' array")]
    MissingListError,
    #[error("TableError: {0}")]
    TableError(#[from] TableError),
}
