pub mod commands;

pub use commands::Cli;

use clap::Parser;

pub fn parse() -> Cli {
    Cli::parse()
}
