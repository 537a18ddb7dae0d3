use serde::{Deserialize, Serialize};

/// Launcher configuration loaded from config.json
#[derive(Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Maximum size of a log file in megabytes before rotation (default: 10MB)
    pub max_file_size_mb: u32,
    /// Maximum number of archived log files to keep (default: 5)
    pub max_archived_logs: u32,
    /// Enable debug logging (default: false)
    pub debug_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: crate::constants::defaults::LOG_MAX_SIZE_MB,
            max_archived_logs: crate::constants::defaults::LOG_MAX_ARCHIVED,
            debug_enabled: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
        }
    }
}
