pub mod errors;
mod models;

use std::time::Duration;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use serde_json::Value;
use crate::config::ForecastParameters;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::{ErrorResponse, ForecastBatch, ForecastResponse};
use crate::table::Table;

/// Struct for fetching weather forecasts and turning them into delimited text
pub struct Forecast {
    client: Client,
    endpoint: String,
    location: String,
    api_key: String,
}

impl Forecast {
    /// Returns a forecast struct ready for fetching and processing weather forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - forecast configuration to use
    pub fn new(config: &ForecastParameters) -> Result<Forecast, ForecastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Forecast {
            client,
            endpoint: config.endpoint.clone(),
            location: config.location.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetches the forecast, flattens it and returns it as comma separated text
    /// with one row per forecast entry
    ///
    pub fn extract(&self) -> Result<String, ForecastError> {
        info!("Extracting started for {}", self.location);

        let batch = self.fetch_batch()?;
        let table = Table::from_entries(&batch.entries)?;
        debug!("Forecast table for {}:\n{}", batch.location, table);
        if table.is_empty() {
            warn!("Forecast for {} has no entries", batch.location);
        }

        let payload = table.to_csv()?;
        info!("Extracted {} forecast rows for {} with columns: {}", table.len(), batch.location, table.columns().join(","));

        Ok(payload)
    }

    /// Retrieves a weather forecast batch for the configured location
    ///
    pub fn fetch_batch(&self) -> Result<ForecastBatch, ForecastError> {
        let response = self.client
            .get(&self.endpoint)
            .query(&[("q", self.location.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .map_err(|e| e.without_url())?;

        let status = response.status();
        let json = response.text()
            .map_err(|e| e.without_url())?;
        debug!("Forecast response ({}): {}", status, json);

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&json)
                .map(|e| e.message)
                .unwrap_or(json);
            return Err(ForecastError::StatusError(status.as_u16(), message));
        }

        let forecast: ForecastResponse = serde_json::from_str(&json)?;
        let entries = match forecast.list {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ForecastError::MissingListError),
        };

        Ok(ForecastBatch {
            location: self.location.clone(),
            entries,
        })
    }
}
