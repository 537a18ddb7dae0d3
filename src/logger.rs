use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

/// Configuration for log rotation
#[derive(Debug, Clone, Copy)]
pub struct LogConfig {
    /// Maximum size of a log file in bytes before rotation
    pub max_file_size: u64,
    /// Maximum number of archived log files to keep
    pub max_archived_logs: u32,
    /// Whether debug messages are written at all
    pub debug_enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_archived_logs: 5,
            debug_enabled: false,
        }
    }
}

impl From<&crate::models::LoggingConfig> for LogConfig {
    fn from(config: &crate::models::LoggingConfig) -> Self {
        Self {
            max_file_size: (config.max_file_size_mb as u64) * 1024 * 1024,
            max_archived_logs: config.max_archived_logs,
            debug_enabled: config.debug_enabled,
        }
    }
}

/// Logger for writing messages to a log file with rotation support.
///
/// Write failures are swallowed: the launcher must still start the app
/// when its own directory is not writable.
pub struct Logger {
    log_path: PathBuf,
    config: LogConfig,
}

impl Logger {
    /// Creates a new logger instance with custom configuration
    pub fn with_config(log_path: PathBuf, config: LogConfig) -> Self {
        Self { log_path, config }
    }

    /// Logs a message to the log file
    pub fn log(&self, message: &str) {
        self.rotate_if_needed();
        self.write_log_entry(message);
    }

    fn write_log_entry(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted_message = format!("[{}] {}\n", timestamp, message);

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
        {
            let _ = file.write_all(formatted_message.as_bytes());
            let _ = file.flush();
        }
    }

    /// Checks if log rotation is needed and performs it
    fn rotate_if_needed(&self) {
        if let Ok(metadata) = fs::metadata(&self.log_path) {
            if metadata.len() > self.config.max_file_size {
                self.rotate_logs();
            }
        }
    }

    /// Performs log rotation
    fn rotate_logs(&self) {
        // First, remove the oldest log if we're at the limit
        let oldest_log = self.get_archived_log_path(self.config.max_archived_logs);
        if oldest_log.exists() {
            let _ = fs::remove_file(&oldest_log);
        }

        // Shift all existing archived logs
        for i in (1..self.config.max_archived_logs).rev() {
            let current_log = self.get_archived_log_path(i);
            let next_log = self.get_archived_log_path(i + 1);

            if current_log.exists() {
                let _ = fs::rename(&current_log, &next_log);
            }
        }

        // Move the current log to .1
        let first_archive = self.get_archived_log_path(1);
        if self.log_path.exists() {
            let _ = fs::rename(&self.log_path, &first_archive);
        }

        // Note the rotation in the fresh file, bypassing the rotation check
        self.write_log_entry("Log rotated due to size limit");
    }

    /// Gets the path for an archived log file
    fn get_archived_log_path(&self, index: u32) -> PathBuf {
        let file_name = self
            .log_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("log.log");

        let archived_name = format!("{}.{}", file_name, index);
        self.log_path.with_file_name(archived_name)
    }

    /// Logs an error message
    pub fn log_error(&self, error: &str) {
        self.log(&format!("ERROR: {}", error));
    }

    /// Logs an info message
    pub fn log_info(&self, info: &str) {
        self.log(&format!("INFO: {}", info));
    }

    /// Logs debug information; dropped unless debug logging is enabled
    pub fn log_debug(&self, debug: &str) {
        if self.config.debug_enabled {
            self.log(&format!("DEBUG: {}", debug));
        }
    }

    /// Logs a warning message
    pub fn log_warning(&self, warning: &str) {
        self.log(&format!("WARNING: {}", warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_writes_timestamped_line() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("launcher.log");
        let logger = Logger::with_config(log_path.clone(), LogConfig::default());

        logger.log_info("starting up");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("INFO: starting up"));
        assert!(content.starts_with('['));
    }

    #[test]
    fn debug_is_dropped_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("launcher.log");
        let logger = Logger::with_config(log_path.clone(), LogConfig::default());

        logger.log_debug("hidden");
        assert!(!log_path.exists());
    }

    #[test]
    fn rotation_archives_oversized_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("launcher.log");
        let config = LogConfig {
            max_file_size: 8,
            max_archived_logs: 2,
            debug_enabled: false,
        };
        let logger = Logger::with_config(log_path.clone(), config);

        logger.log_info("first message, longer than eight bytes");
        logger.log_info("second message");

        assert!(dir.path().join("launcher.log.1").exists());
        let current = fs::read_to_string(&log_path).unwrap();
        assert!(current.contains("Log rotated due to size limit"));
    }
}
