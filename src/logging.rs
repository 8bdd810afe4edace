use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} - {m}{n}";
const LOG_FILE: &str = "weather_pipeline.log";

/// Sets up logging to file and, optionally, to stdout
///
/// # Arguments
///
/// * 'log_path' - directory (with trailing separator) to put the log file in
/// * 'log_level' - max level to log
/// * 'log_to_stdout' - whether to also log to stdout
pub fn setup_logger(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Handle, LoggerError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(format!("{}{}", log_path, LOG_FILE))
        .map_err(|e| LoggerError(format!("log file: {}", e)))?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = builder
        .build(root.build(log_level))
        .map_err(|e| LoggerError(format!("config: {}", e)))?;

    let handle = log4rs::init_config(config)
        .map_err(|e| LoggerError(format!("init: {}", e)))?;

    Ok(handle)
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
#[error("LoggerError: {0}")]
pub struct LoggerError(pub String);

#[cfg(test)]
mod tests {
    use log::info;
    use super::*;

    #[test]
    fn logs_to_file_in_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = format!("{}/", dir.path().display());

        let _handle = setup_logger(&log_path, LevelFilter::Info, false).unwrap();
        info!("logger ready");

        let logged = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert!(logged.contains("INFO"));
        assert!(logged.contains("logger ready"));
    }
}
