use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::bundle::BundleLayout;
use crate::error::{AppError, Result};
use crate::logger::Logger;

pub struct Launcher {
    layout: BundleLayout,
    pub logger: Logger,
}

impl Launcher {
    /// Creates a new launcher instance
    pub fn new(layout: BundleLayout, logger: Logger) -> Self {
        Self { layout, logger }
    }

    /// Checks that the bundled yt-dlp helper is present and marks it
    /// executable. A missing helper is the one explicitly handled error.
    pub fn prepare(&self) -> Result<()> {
        let helper = self.layout.helper_path();

        if !helper.is_file() {
            return Err(AppError::HelperMissing(helper));
        }

        self.logger
            .log_debug(&format!("Marking helper executable: {}", helper.display()));
        mark_executable(&helper)?;

        Ok(())
    }

    /// Marks the main program executable and runs it from the resources
    /// directory with inherited standard streams.
    ///
    /// There is deliberately no existence check for the main program; a
    /// missing binary surfaces as the failure of the permission change or
    /// of the spawn itself.
    pub fn launch(&self) -> Result<ExitStatus> {
        let main_program = self.layout.main_program_path();
        let resources_dir = self.layout.resources_dir();

        mark_executable(&main_program)?;

        let path_env = child_path_env(resources_dir)?;
        self.logger
            .log_info(&format!("Launching {}", main_program.display()));
        self.logger
            .log_debug(&format!("Child PATH: {:?}", path_env));

        // Stdin/stdout/stderr are inherited; no arguments are forwarded.
        let status = Command::new(&main_program)
            .env("PATH", &path_env)
            .current_dir(resources_dir)
            .status()
            .map_err(|e| {
                AppError::Launch(format!("Failed to start {}: {}", main_program.display(), e))
            })?;

        Ok(status)
    }
}

/// Builds the child's PATH: the parent's entries with the resources
/// directory prepended. The parent's own environment is left untouched.
pub fn child_path_env(resources_dir: &Path) -> Result<OsString> {
    let mut entries = vec![resources_dir.to_path_buf()];
    if let Some(parent_path) = env::var_os("PATH") {
        entries.extend(env::split_paths(&parent_path));
    }

    env::join_paths(entries).map_err(|e| AppError::Launch(format!("Invalid PATH entry: {}", e)))
}

/// Adds the executable bits to a file's existing mode, chmod +x style
pub fn mark_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path)?.permissions().mode();
        fs::set_permissions(path, fs::Permissions::from_mode(mode | 0o111))?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}

/// Maps a child exit status to the code the launcher itself exits with.
/// On unix a signal death maps to 128 + signal, shell convention.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
