//! Logging for the dashboard.
//!
//! Every module logs through the `log` macros. [`Logger::install`] routes those
//! records through a `fern` dispatch into an in-memory buffer, which backs the
//! logs dialog, and optionally into a log file. Nothing goes to stdout or
//! stderr while the terminal UI owns the screen.

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    /// Keep at most `capacity` entries; the oldest are dropped first.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(LOG_BUFFER_CAPACITY)))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.push(format!("[{}] {}", timestamp, message));
    }

    /// Add an entry for a `log` record
    pub fn record(&self, record: &log::Record) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.push(format!("[{}] {:<5} {}", timestamp, record.level(), record.args()));
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            while logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Install the global `log` backend.
    ///
    /// Returns the log file path when file logging is enabled. Can only
    /// succeed once per process.
    pub fn install(&self, config: &LoggingConfig) -> Result<Option<PathBuf>> {
        let level = config.level_filter()?;
        let memory = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("rustls", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| memory.record(record)));

        let mut log_path = None;
        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} [{}] {}: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
            log_path = Some(path);
        }

        dispatch.apply().context("Failed to install logger")?;
        Ok(log_path)
    }

    /// Location of the log file written when `logging.enabled` is set
    pub fn get_log_file_path() -> Result<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(base.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
