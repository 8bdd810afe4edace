use anyhow::Result;
use log::{error, info};
use crate::errors::PipelineError;
use crate::initialization::init;
use crate::worker::run;

mod errors;
mod config;
mod initialization;
mod logging;
mod macros;
mod manager_forecast;
mod manager_storage;
pub mod models;
mod table;
mod worker;

fn main() -> Result<()> {
    // Load config and set up all managers. If initialization fails, we are pretty much out of luck
    // and can't even log.
    let (config, mgr) = match init() {
        Ok((c, m)) => (c, m),
        Err(e) => {
            return Err(PipelineError(format!("Initialization failed: {}", e)).into());
        }
    };

    // One shot, no catch-up of earlier runs
    match run(&mgr, &config.retry) {
        Ok(report) => {
            info!("Run succeeded: {}", report);
        },
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(PipelineError(e.to_string()).into());
        }
    }

    Ok(())
}
