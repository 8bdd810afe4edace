use serde::Deserialize;
use serde_json::Value;

/// The parts of an API response the pipeline cares about.
/// Everything inside an entry is kept as-is.
#[derive(Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Value>,
}

/// Error body as returned by the API on e.g. an invalid key
#[derive(Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// All forecast entries for one location from one API call
pub struct ForecastBatch {
    pub location: String,
    pub entries: Vec<Value>,
}
