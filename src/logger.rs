//! Logging setup
//!
//! Everything logs through the `log` macros. At startup a single `fern`
//! dispatch is installed that writes to stderr at a level picked by the `-v`
//! flags and, when enabled in the configuration, also appends to a log file in
//! the cache directory.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

/// Map a `-v` count to a stderr level.
///
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch without installing it
pub fn build_dispatch(verbosity: u8, logging: &LoggingConfig) -> Result<fern::Dispatch> {
    let stderr = fern::Dispatch::new()
        .level(verbosity_level(verbosity))
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(stderr);

    if logging.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(fern::Dispatch::new().level(logging.level_filter()?).chain(file));
    }

    Ok(dispatch)
}

/// Install the global logger. Call once at startup.
pub fn init(verbosity: u8, logging: &LoggingConfig) -> Result<()> {
    build_dispatch(verbosity, logging)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(())
}
