use crate::log_debug;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name rtask uses under the config and AppData roots.
pub const APP_DIR_NAME: &str = "rtask";
/// rtask's data directory, directly under the home directory.
pub const DATA_DIR_NAME: &str = ".rtasks";

/// Operating system family the cleanup runs on.
/// Only the Windows / not-Windows distinction changes the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// Identifies the platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Maps an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// The Windows application-data roots (`LOCALAPPDATA` and `APPDATA`).
/// A root that is unset or empty is `None` and produces no candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDataRoots {
    pub local: Option<PathBuf>,
    pub roaming: Option<PathBuf>,
}

impl AppDataRoots {
    /// Reads both roots from the process environment.
    pub fn from_env() -> Self {
        Self {
            local: non_empty_path(env::var_os("LOCALAPPDATA")),
            roaming: non_empty_path(env::var_os("APPDATA")),
        }
    }
}

fn non_empty_path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// A directory that may hold rtask state and should be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
    /// Short description used in log lines and the summary table.
    pub label: &'static str,
    pub path: PathBuf,
}

impl CleanupTarget {
    fn new(label: &'static str, path: PathBuf) -> Self {
        Self { label, path }
    }
}

/// Builds the ordered list of candidate directories.
///
/// The data and config directories are always included. The two AppData
/// candidates are only added on Windows, and only for roots that are set.
pub fn candidate_targets(home: &Path, platform: Platform, app_data: &AppDataRoots) -> Vec<CleanupTarget> {
    let mut targets = home_targets(home);
    targets.extend(app_data_targets(platform, app_data));
    targets
}

/// `<home>/.rtasks` and `<home>/.config/rtask`, on every platform.
pub fn home_targets(home: &Path) -> Vec<CleanupTarget> {
    vec![
        CleanupTarget::new("Data directory", home.join(DATA_DIR_NAME)),
        CleanupTarget::new("Config directory", home.join(".config").join(APP_DIR_NAME)),
    ]
}

/// `<LOCALAPPDATA>/rtask` and `<APPDATA>/rtask`, on Windows only.
pub fn app_data_targets(platform: Platform, app_data: &AppDataRoots) -> Vec<CleanupTarget> {
    let mut targets = Vec::new();
    if platform != Platform::Windows {
        return targets;
    }

    let app_data_roots = [
        ("Local AppData", "LOCALAPPDATA", &app_data.local),
        ("Roaming AppData", "APPDATA", &app_data.roaming),
    ];
    for (label, var, root) in app_data_roots {
        match root {
            Some(root) => targets.push(CleanupTarget::new(label, root.join(APP_DIR_NAME))),
            None => log_debug!("{} is not set, skipping the {} candidate", var, label),
        }
    }

    targets
}
