use clap::Parser; // Import the `Parser` derive macro from the `clap` crate.

/// Command-line interface for `rtask-purge`.
///
/// There are no subcommands: every invocation attempts `cargo uninstall rtask`
/// and then removes rtask's data and configuration directories. The flags only
/// change how much is printed along the way.
#[derive(Parser, Debug)]
#[command(
    name = "rtask-purge",
    about = "Delete all rtask data and configuration files and uninstall rtask",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Only print warnings, errors and the closing message
    ///
    /// `#[arg(long, short)]` accepts both `--quiet` and `-q`.
    #[arg(long, short, conflicts_with = "debug")]
    pub quiet: bool,

    /// Print debug-level details (exit codes, skipped candidates, sizes)
    #[arg(long)]
    pub debug: bool,
}
