use thiserror::Error;

/// Error depicting a pipeline run that could not be completed
///
#[derive(Debug, Error)]
#[error("error while running pipeline: {0}")]
pub struct PipelineError(pub String);
