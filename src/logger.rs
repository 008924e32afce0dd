use colored::Colorize;
// Imports the `Colorize` trait so the level prefixes can be coloured.
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
// The current level is a process-wide atomic, set once by `init` and read by every macro call.

/// Severity of a log line. Lower values are more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Initializes the logger from the CLI flags.
///
/// * `debug` - show debug-level messages as well.
/// * `quiet` - only show warnings and errors. `debug` wins if both are set.
pub fn init(debug: bool, quiet: bool) {
    let level = if debug {
        LogLevel::Debug
    } else if quiet {
        LogLevel::Warn
    } else {
        LogLevel::Info
    };
    set_level(level);
}

pub fn set_level(level: LogLevel) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn level() -> LogLevel {
    LogLevel::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Returns `true` when messages of `level` should be printed.
pub fn enabled(level: LogLevel) -> bool {
    level <= self::level()
}

/// Writes one already-filtered log line to stderr.
/// Not meant to be called directly; use the `log_*!` macros.
#[doc(hidden)]
pub fn emit(level: LogLevel, args: fmt::Arguments<'_>) {
    let prefix = match level {
        LogLevel::Error => "[ERROR]".bright_red().bold(),
        LogLevel::Warn => "[WARN] ".bright_yellow().bold(),
        LogLevel::Info => "[INFO] ".bright_cyan().bold(),
        LogLevel::Debug => "[DEBUG]".bright_black().bold(),
    };
    eprintln!("{} {}", prefix, args);
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Error) {
            $crate::logger::emit($crate::logger::LogLevel::Error, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Warn) {
            $crate::logger::emit($crate::logger::LogLevel::Warn, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Info) {
            $crate::logger::emit($crate::logger::LogLevel::Info, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Debug) {
            $crate::logger::emit($crate::logger::LogLevel::Debug, format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_importance() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(LogLevel::Warn as u8), LogLevel::Warn);
        assert_eq!(LogLevel::from_u8(42), LogLevel::Debug);
    }
}
