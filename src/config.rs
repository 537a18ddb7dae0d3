use std::fs;
use std::path::PathBuf;

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{AppError, Result};
use crate::models::AppConfig;

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_dir: PathBuf) -> Self {
        let config_path = app_dir.join(CONFIG_FILE_NAME);
        Self { config_path }
    }

    /// Loads config.json, creating it with defaults on first run.
    ///
    /// A launcher inside a signed bundle may sit in a read-only directory,
    /// so a failure to write the default file is not fatal.
    pub fn load_config(&self) -> Result<AppConfig> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let config: AppConfig = serde_json::from_str(&content)
                .map_err(|e| AppError::Config(format!("Failed to parse config.json: {}", e)))?;
            Ok(config)
        } else {
            let default_config = AppConfig::default();
            let _ = self.save_config(&default_config);
            Ok(default_config)
        }
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let config_json = serde_json::to_string_pretty(config)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&self.config_path, config_json)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
