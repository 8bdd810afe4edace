use chrono::Utc;
use log::info;
use thiserror::Error;
use crate::config::RetryParameters;
use crate::initialization::Mgr;
use crate::models::RunReport;
use crate::retry;

/// Runs the pipeline once: extracts the forecast and uploads the resulting payload.
/// Each step is retried according to the retry policy, and upload never starts
/// unless extraction succeeded.
///
/// # Arguments
///
/// * 'mgr' - struct with configured managers
/// * 'policy' - retry policy applied to each step
pub fn run(mgr: &Mgr, policy: &RetryParameters) -> Result<RunReport, WorkerError> {
    let started = Utc::now();
    info!("Run start: {}", started);

    let (payload, extract_attempts) = retry!(policy, "extract", || mgr.forecast.extract());
    let payload = payload
        .map_err(|e| WorkerError::ExtractError(format!("after {} attempts: {}", extract_attempts, e)))?;

    let bytes = payload.len();
    info!("Uploading {} bytes to {}", bytes, mgr.storage.location());
    let (location, upload_attempts) = retry!(policy, "upload", || mgr.storage.upload(payload.clone()));
    let location = location
        .map_err(|e| WorkerError::UploadError(format!("after {} attempts: {}", upload_attempts, e)))?;

    Ok(RunReport {
        started,
        finished: Utc::now(),
        location,
        bytes,
        extract_attempts,
        upload_attempts,
    })
}

/// Error depicting errors that occur while running the pipeline
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("error while extracting forecast: {0}")]
    ExtractError(String),
    #[error("error while uploading payload: {0}")]
    UploadError(String),
}
