use crate::core::targets::CleanupTarget;
use crate::utils::filesystem::{bytes_to_human, calculate_dir_size, path_present, remove_dir_tree};
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;

/// Result of processing a single candidate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Nothing existed at the path; nothing was done.
    NotFound,
    /// The path was removed. `freed_bytes` is measured before deletion.
    Deleted { freed_bytes: u64 },
    /// The path existed but could not be removed (or could not be checked).
    Failed { reason: String },
}

impl PathOutcome {
    /// Short status word for the summary table.
    pub fn status(&self) -> &'static str {
        match self {
            PathOutcome::NotFound => "Not found",
            PathOutcome::Deleted { .. } => "Deleted",
            PathOutcome::Failed { .. } => "Failed",
        }
    }
}

/// A candidate together with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub target: CleanupTarget,
    pub outcome: PathOutcome,
}

/// Checks a single candidate and deletes it if present.
///
/// Never returns an error: failures are captured in [`PathOutcome::Failed`].
pub fn remove_target(target: &CleanupTarget) -> PathOutcome {
    let path = &target.path;
    let shown = path.display().to_string();

    match path_present(path) {
        Ok(false) => {
            log_info!("{} {}", shown.bright_white(), "not found".bright_black());
            return PathOutcome::NotFound;
        }
        Ok(true) => {}
        Err(e) => {
            log_warn!("{} {}: {}", "Error checking".bright_yellow(), shown.bright_white(), e);
            return PathOutcome::Failed { reason: e.to_string() };
        }
    }

    log_info!("{} {}...", "Deleting".bright_green(), shown.bright_white());
    let freed_bytes = calculate_dir_size(path);
    log_debug!("{} holds {}", shown, bytes_to_human(freed_bytes));

    match remove_dir_tree(path) {
        Ok(()) => {
            log_info!("{} {}", "✓ Deleted".bright_green(), shown.bright_white());
            PathOutcome::Deleted { freed_bytes }
        }
        Err(e) => {
            log_warn!("{} {}: {}", "Error deleting".bright_yellow(), shown.bright_white(), e);
            PathOutcome::Failed { reason: e.to_string() }
        }
    }
}

/// Processes every candidate in order. A failure on one candidate never
/// stops the remaining ones from being attempted.
pub fn remove_targets(targets: Vec<CleanupTarget>) -> Vec<TargetReport> {
    targets
        .into_iter()
        .map(|target| {
            log_debug!("Processing {}: {}", target.label, target.path.display());
            let outcome = remove_target(&target);
            TargetReport { target, outcome }
        })
        .collect()
}
