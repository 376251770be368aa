//! Detached application launch.
//!
//! The launcher hands the chosen shortcut to a helper program and exits without
//! waiting. The helper's output is discarded and its exit status is never observed.

use crate::domain::{AppEntry, LauncherError, Result, SourceKind};
use std::process::{Command, Stdio};

/// Helper used for natively installed shortcuts.
pub const NATIVE_LAUNCH_HELPER: &str = "gtk-launch";

/// Helper used for Flatpak exports.
pub const FLATPAK_LAUNCH_HELPER: &str = "flatpak";

/// Program and arguments that start `entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Chooses the helper for the entry's provenance.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlaunch::domain::{AppEntry, SourceKind};
    /// use mlaunch::infrastructure::LaunchCommand;
    ///
    /// let gimp = AppEntry::from_file_name("org.gimp.GIMP.desktop", SourceKind::Flatpak).unwrap();
    /// let command = LaunchCommand::for_entry(&gimp);
    /// assert_eq!(command.program, "flatpak");
    /// assert_eq!(command.args, ["run", "org.gimp.GIMP"]);
    /// ```
    #[must_use]
    pub fn for_entry(entry: &AppEntry) -> Self {
        match entry.source_kind {
            SourceKind::Native => Self {
                program: NATIVE_LAUNCH_HELPER,
                args: vec![entry.launch_token.clone()],
            },
            SourceKind::Flatpak => Self {
                program: FLATPAK_LAUNCH_HELPER,
                args: vec!["run".to_string(), entry.app_id().to_string()],
            },
        }
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command
    }
}

/// Starts `entry` in the background.
///
/// Returns as soon as the helper has been spawned. The child is left running in its
/// own process group so it outlives the launcher.
///
/// # Errors
///
/// Returns [`LauncherError::Launch`] when the helper cannot be spawned (for example
/// when it is not installed). Callers log this and carry on.
pub fn launch(entry: &AppEntry) -> Result<()> {
    let launch_command = LaunchCommand::for_entry(entry);
    tracing::info!(
        app = %entry.display_name,
        program = launch_command.program,
        args = ?launch_command.args,
        "launching application"
    );

    let child = launch_command
        .to_command()
        .spawn()
        .map_err(|e| LauncherError::Launch(format!("{}: {e}", launch_command.program)))?;

    tracing::debug!(pid = child.id(), "launch helper spawned");
    Ok(())
}
