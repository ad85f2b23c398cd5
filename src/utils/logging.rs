// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file bootstraps log4rs for the binary. Diagnostics go to stderr so the
// report on stdout stays readable (and the JSON summary stays parseable).
//
// Tree Location:
// - src/utils/logging.rs (logger setup)
// - Depends on: log, log4rs, thiserror

use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid logger configuration: {0}")]
    Config(String),

    #[error("Logger already installed")]
    AlreadyInstalled(#[from] SetLoggerError),
}

/// Build the stderr console configuration at `level`
pub fn build_config(level: LevelFilter) -> Result<Config, LoggingError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| LoggingError::Config(e.to_string()))
}

/// Install the global logger
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    let config = build_config(level)?;
    log4rs::init_config(config)?;
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial logger bootstrap.
//   - log4rs console appender on stderr with a pattern encoder.
