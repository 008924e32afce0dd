//! `rtask-purge` removes everything the `rtask` task tracker leaves behind:
//! the cargo-installed binary and the data / configuration directories.
//!
//! The binary in `src/bin/rtask_purge.rs` is a thin launcher around
//! [`core::cleaner_orchestrator::clean_residual_data`].

pub mod logger; // Verbosity level and the `log_*!` macros.
pub mod cli; // Command-line flags.
pub mod core; // Uninstall invocation, candidate paths and the cleanup run itself.
pub mod utils; // Filesystem helpers.
