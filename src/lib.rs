pub mod bundle;
pub mod config;
pub mod constants;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod models;

pub use bundle::BundleLayout;
pub use config::ConfigManager;
pub use error::{AppError, Result};
pub use launcher::Launcher;
pub use logger::Logger;
