//! launch Towel YT Downloader from its app bundle

use std::process;

mod bundle;
mod config;
mod constants;
mod error;
mod launcher;
mod logger;
mod models;

use bundle::BundleLayout;
use config::ConfigManager;
use error::AppError;
use launcher::Launcher;
use logger::{LogConfig, Logger};
use models::AppConfig;

fn main() {
    let layout = match BundleLayout::discover() {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Load configuration first to get logging settings; a broken config
    // must not stop the app from starting
    let config_manager = ConfigManager::new(layout.launcher_dir().to_path_buf());
    let (app_config, config_error) = match config_manager.load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_config = LogConfig::from(&app_config.logging);
    let log_path = layout.launcher_dir().join(constants::LOG_FILE_NAME);
    let logger = Logger::with_config(log_path, log_config);

    if let Some(e) = config_error {
        logger.log_warning(&format!("Using default config: {}", e));
    }

    logger.log_info(&format!("Launcher directory: {}", layout.launcher_dir().display()));
    logger.log_info(&format!("Resources directory: {}", layout.resources_dir().display()));

    let launcher = Launcher::new(layout, logger);

    if let Err(e) = launcher.prepare() {
        if let AppError::HelperMissing(path) = &e {
            launcher
                .logger
                .log_error(&format!("Required helper missing: {}", path.display()));
        } else {
            launcher
                .logger
                .log_error(&format!("Failed to prepare resources: {}", e));
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match launcher.launch() {
        Ok(status) => {
            let code = launcher::exit_code(status);
            launcher
                .logger
                .log_info(&format!("{} exited with code {}", constants::MAIN_PROGRAM, code));
            process::exit(code);
        }
        Err(e) => {
            launcher.logger.log_error(&format!("Failed: {}", e));
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
