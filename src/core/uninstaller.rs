use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
// Imports the `Colorize` trait for coloured log output.
use std::process::{Command, Stdio};
// `Command` spawns the package manager; it shares our stdin and `Stdio::inherit` passes its output straight through.

/// What happened when the package manager was invoked.
///
/// The exit code is kept for the summary, but a non-zero exit is not an error:
/// the package may simply not be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// The child process ran to completion. `code` is `None` if it was killed by a signal.
    Completed { code: Option<i32> },
    /// The package manager could not be started (e.g. it is not on `PATH`).
    SpawnFailed { reason: String },
}

/// Defines a common interface for anything that can remove an installed binary.
///
/// Implementations must never fail: every problem is folded into the
/// returned [`UninstallOutcome`] so the cleanup run can carry on.
pub trait Uninstaller {
    /// Returns the name of the package being removed, for log lines.
    fn name(&self) -> &str;

    /// Attempts the uninstall, blocking until it finishes.
    fn uninstall(&self) -> UninstallOutcome;
}

/// Removes a binary installed with a package manager that takes
/// `<program> uninstall <package>`, by default `cargo uninstall rtask`.
pub struct PackageManagerUninstall {
    program: String,
    package: String,
}

impl PackageManagerUninstall {
    /// # Arguments
    /// * `program` - The package manager executable, looked up on `PATH`.
    /// * `package` - The package to uninstall.
    pub fn new(program: &str, package: &str) -> Self {
        Self {
            program: program.to_string(),
            package: package.to_string(),
        }
    }

    /// `cargo uninstall rtask`.
    pub fn cargo_rtask() -> Self {
        Self::new("cargo", "rtask")
    }

    fn command_line(&self) -> String {
        format!("{} uninstall {}", self.program, self.package)
    }
}

impl Uninstaller for PackageManagerUninstall {
    fn name(&self) -> &str {
        &self.package
    }

    fn uninstall(&self) -> UninstallOutcome {
        log_info!(
            "Attempting to uninstall {} from {}...",
            self.package.bright_white(),
            self.program.bright_white()
        );
        log_debug!("Running: {}", self.command_line());

        let status = Command::new(&self.program)
            .arg("uninstall")
            .arg(&self.package)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) => {
                log_debug!("`{}` exited with {}", self.command_line(), status);
                log_info!("{} uninstall command completed.", self.program);
                UninstallOutcome::Completed { code: status.code() }
            }
            Err(e) => {
                log_warn!(
                    "{} {}: {}",
                    "Error during".bright_yellow(),
                    self.command_line().bright_white(),
                    e.to_string().bright_white()
                );
                UninstallOutcome::SpawnFailed { reason: e.to_string() }
            }
        }
    }
}
