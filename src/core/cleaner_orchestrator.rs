use colored::Colorize;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};
use crate::logger::{enabled, LogLevel};
use crate::{log_debug, log_error, log_info};

use super::cleaner::{remove_targets, PathOutcome, TargetReport};
use super::targets::{app_data_targets, candidate_targets, AppDataRoots, CleanupTarget, Platform};
use super::uninstaller::{UninstallOutcome, Uninstaller};
use crate::utils::filesystem::bytes_to_human;

/// Everything the cleanup run needs to know about the machine it runs on.
///
/// Built from the real environment by [`CleanupPlan::detect`], or by hand in
/// tests with a temporary directory as `home`.
#[derive(Debug, Clone)]
pub struct CleanupPlan {
    /// `None` when the home directory could not be resolved.
    pub home: Option<PathBuf>,
    pub platform: Platform,
    pub app_data: AppDataRoots,
}

impl CleanupPlan {
    pub fn new(home: impl Into<PathBuf>, platform: Platform, app_data: AppDataRoots) -> Self {
        Self {
            home: Some(home.into()),
            platform,
            app_data,
        }
    }

    /// Resolves the home directory, the platform and the AppData roots of the current process.
    pub fn detect() -> Self {
        Self {
            home: dirs::home_dir(),
            platform: Platform::current(),
            app_data: AppDataRoots::from_env(),
        }
    }

    /// The candidates this plan will process, in order.
    pub fn targets(&self) -> Vec<CleanupTarget> {
        match &self.home {
            Some(home) => candidate_targets(home, self.platform, &self.app_data),
            None => {
                log_error!("Could not determine the home directory; skipping ~/.rtasks and ~/.config/rtask");
                app_data_targets(self.platform, &self.app_data)
            }
        }
    }
}

/// What a cleanup run did. Nothing in here is an error for the process.
#[derive(Debug, Clone)]
pub struct CleanupReport {
    pub uninstall: UninstallOutcome,
    pub targets: Vec<TargetReport>,
}

impl CleanupReport {
    fn count(&self, status: &str) -> usize {
        self.targets.iter().filter(|r| r.outcome.status() == status).count()
    }

    pub fn deleted(&self) -> usize {
        self.count("Deleted")
    }

    pub fn not_found(&self) -> usize {
        self.count("Not found")
    }

    pub fn failed(&self) -> usize {
        self.count("Failed")
    }

    pub fn freed_bytes(&self) -> u64 {
        self.targets
            .iter()
            .map(|r| match r.outcome {
                PathOutcome::Deleted { freed_bytes } => freed_bytes,
                _ => 0,
            })
            .sum()
    }

    /// Looks up the report for a given path.
    pub fn outcome_for(&self, path: &std::path::Path) -> Option<&PathOutcome> {
        self.targets
            .iter()
            .find(|r| r.target.path == path)
            .map(|r| &r.outcome)
    }
}

/// One row of the summary table.
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Size")]
    size: String,
}

impl From<&TargetReport> for SummaryRow {
    fn from(report: &TargetReport) -> Self {
        let (status, size) = match &report.outcome {
            PathOutcome::NotFound => (report.outcome.status().to_string(), "-".to_string()),
            PathOutcome::Deleted { freed_bytes } => {
                (report.outcome.status().to_string(), bytes_to_human(*freed_bytes))
            }
            PathOutcome::Failed { reason } => (format!("Failed: {}", reason), "-".to_string()),
        };
        SummaryRow {
            target: report.target.label.to_string(),
            path: report.target.path.display().to_string(),
            status,
            size,
        }
    }
}

/// Removes rtask from the machine described by `plan`.
///
/// 1. Asks `uninstaller` to remove the binary. Its outcome is recorded, never acted on.
/// 2. Deletes every candidate directory that exists, continuing past failures.
///
/// Always returns a report; no step can abort the run.
pub fn clean_residual_data(plan: &CleanupPlan, uninstaller: &dyn Uninstaller) -> CleanupReport {
    log_debug!(
        "Starting cleanup for '{}' on {} (home: {:?})",
        uninstaller.name(),
        plan.platform,
        plan.home
    );

    if enabled(LogLevel::Info) {
        println!("{}", "rtask Data Deletion Utility".bold().underline().cyan());
    }

    let uninstall = uninstaller.uninstall();
    if let UninstallOutcome::Completed { code } = &uninstall {
        log_debug!("Uninstall exit code: {:?}", code);
    }

    if enabled(LogLevel::Info) {
        println!("\n{}", "🧹 Removing data and configuration...".bold().underline().green());
    }
    let targets = remove_targets(plan.targets());

    let report = CleanupReport { uninstall, targets };
    print_summary(&report);

    log_debug!("✅ Finished cleanup.");
    report
}

fn print_summary(report: &CleanupReport) {
    if enabled(LogLevel::Info) && !report.targets.is_empty() {
        let rows: Vec<SummaryRow> = report.targets.iter().map(SummaryRow::from).collect();
        let table = Table::new(&rows).with(Style::modern()).to_string();

        println!("\n{}", "📄 Cleanup Summary".bold().underline().purple());
        println!("{}", table);
        log_info!(
            "{} deleted, {} not found, {} failed. Space freed: {}",
            report.deleted().to_string().bright_green(),
            report.not_found().to_string().bright_white(),
            report.failed().to_string().bright_yellow(),
            bytes_to_human(report.freed_bytes()).bright_green().bold()
        );
    }

    println!("\n{}", "Done! All rtask data and configuration files should be removed.".bright_white());
    println!("The next time you run rtask, it will start with a fresh setup.");
}
