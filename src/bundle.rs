use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{HELPER_EXECUTABLE, MAIN_PROGRAM, RESOURCES_DIR_NAME};
use crate::error::Result;

/// Filesystem layout of the app bundle, resolved relative to the launcher.
///
/// The launcher lives in `Contents/MacOS`; the helper and the main program
/// live one level up in `Contents/Resources`.
pub struct BundleLayout {
    launcher_dir: PathBuf,
    resources_dir: PathBuf,
}

impl BundleLayout {
    /// Resolves the layout from the running executable's own location,
    /// following symlinks.
    pub fn discover() -> Result<Self> {
        let exe_path = fs::canonicalize(env::current_exe()?)?;
        let launcher_dir = exe_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        Ok(Self::from_launcher_dir(launcher_dir))
    }

    /// Builds the layout from an explicit launcher directory
    pub fn from_launcher_dir(launcher_dir: PathBuf) -> Self {
        let resources_dir = launcher_dir
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(RESOURCES_DIR_NAME);

        Self {
            launcher_dir,
            resources_dir,
        }
    }

    pub fn launcher_dir(&self) -> &Path {
        &self.launcher_dir
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    pub fn helper_path(&self) -> PathBuf {
        self.resources_dir.join(HELPER_EXECUTABLE)
    }

    /// Path to the main program. The file name contains a literal space
    /// and is carried as a single path value, never split.
    pub fn main_program_path(&self) -> PathBuf {
        self.resources_dir.join(MAIN_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_dir_is_sibling_of_launcher_dir() {
        let layout =
            BundleLayout::from_launcher_dir(PathBuf::from("/Applications/Towel.app/Contents/MacOS"));

        assert_eq!(
            layout.resources_dir(),
            Path::new("/Applications/Towel.app/Contents/Resources")
        );
    }

    #[test]
    fn helper_path_is_inside_resources() {
        let layout = BundleLayout::from_launcher_dir(PathBuf::from("/bundle/Contents/MacOS"));

        assert_eq!(
            layout.helper_path(),
            Path::new("/bundle/Contents/Resources/yt-dlp")
        );
    }

    #[test]
    fn main_program_name_keeps_embedded_space() {
        let layout = BundleLayout::from_launcher_dir(PathBuf::from("/bundle/Contents/MacOS"));

        assert_eq!(
            layout.main_program_path(),
            Path::new("/bundle/Contents/Resources/Towel YT Downloader")
        );
    }
}
