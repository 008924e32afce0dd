use rtask_purge::cli; // Command-line flags.
use rtask_purge::core::cleaner_orchestrator::{clean_residual_data, CleanupPlan};
use rtask_purge::core::uninstaller::PackageManagerUninstall;
use rtask_purge::{log_debug, logger};

/// Entry point of `rtask-purge`.
///
/// Parses the verbosity flags, initializes the logger, then runs the full
/// cleanup once: `cargo uninstall rtask` followed by removal of rtask's
/// data and configuration directories. The process always exits with 0;
/// individual failures are reported along the way.
fn main() {
    let cli = cli::parse();
    logger::init(cli.debug, cli.quiet);

    let plan = CleanupPlan::detect();
    let uninstaller = PackageManagerUninstall::cargo_rtask();

    let report = clean_residual_data(&plan, &uninstaller);
    log_debug!(
        "Finished execution: {} deleted, {} failed.",
        report.deleted(),
        report.failed()
    );
}
