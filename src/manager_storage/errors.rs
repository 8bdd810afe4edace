use thiserror::Error;

/// Error depicting errors that occur while writing to object storage
///
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SetupError: {0}")]
    SetupError(String),
    #[error("RuntimeError: {0}")]
    RuntimeError(#[from] std::io::Error),
    #[error("WriteError: {0}")]
    WriteError(#[from] object_store::Error),
}
