pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "launcher.log";
pub const RESOURCES_DIR_NAME: &str = "Resources";
pub const HELPER_EXECUTABLE: &str = "yt-dlp";
pub const MAIN_PROGRAM: &str = "Towel YT Downloader";

/// Default configuration values
pub mod defaults {
    pub const LOG_MAX_SIZE_MB: u32 = 10;
    pub const LOG_MAX_ARCHIVED: u32 = 5;
}
