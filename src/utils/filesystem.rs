use crate::log_debug;
// Imports the `log_debug` macro for logging debug-level messages.
use std::fs;
// Standard library file system module, for metadata and removal.
use std::io;
// `io::Result` and `io::Error` are the error currency of every helper here.
use std::path::Path;
use walkdir::WalkDir;
// `WalkDir` walks a directory tree without following symlinks by default.

/// Recursively deletes the directory at `path`.
///
/// Candidate targets are directories, so anything else found in their place
/// is treated as an error rather than silently removed. A symbolic link is
/// refused too: removing only the link would leave the data it points to.
///
/// # Errors
///
/// * `NotFound` if nothing exists at `path`.
/// * `InvalidInput` if `path` is a symbolic link. Neither the link nor its target is touched.
/// * `NotADirectory` if `path` is a regular file or another non-directory object.
/// * Any error returned by `fs::remove_dir_all` (permission denied, busy, ...).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use rtask_purge::utils::filesystem::remove_dir_tree;
/// remove_dir_tree(Path::new("/tmp/some_dir")).expect("Failed to remove directory");
/// ```
pub fn remove_dir_tree(path: &Path) -> io::Result<()> {
    log_debug!("Attempting to remove path: {}", path.display());

    // `symlink_metadata` does not follow a final symlink, so a link is seen as a link.
    let metadata = fs::symlink_metadata(path)?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a symbolic link; target not removed", path.display()),
        ))
    } else if file_type.is_dir() {
        log_debug!("Path is a directory. Recursively removing: {}", path.display());
        fs::remove_dir_all(path)
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", path.display()),
        ))
    }
}

/// Returns `true` if something exists at `path`, following symlinks.
/// A dangling symlink counts as absent.
///
/// Errors other than "not found" (e.g. permission denied on a parent) are
/// returned so the caller can report them against the path.
pub fn path_present(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Calculates the total size in bytes of the regular files under `path`.
///
/// Symlinks are not followed. Entries that cannot be read are skipped and
/// logged at debug level, so the result is a best-effort lower bound.
pub fn calculate_dir_size(path: &Path) -> u64 {
    let mut size = 0;
    for entry in WalkDir::new(path).follow_links(false).follow_root_links(false) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => match entry.metadata() {
                Ok(metadata) => size += metadata.len(),
                Err(e) => log_debug!("Could not read metadata for {}: {}", entry.path().display(), e),
            },
            Ok(_) => {}
            Err(e) => log_debug!("Skipping unreadable entry under {}: {}", path.display(), e),
        }
    }
    size
}

/// Converts a number of bytes into a human-readable string
/// (e.g. "10.50 MB", "512 bytes").
pub fn bytes_to_human(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;

    if b >= GB {
        format!("{:.2} GB", b / GB)
    } else if b >= MB {
        format!("{:.2} MB", b / MB)
    } else if b >= KB {
        format!("{:.2} KB", b / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data");
        fs::create_dir_all(dir.join("nested/deeper")).unwrap();
        fs::write(dir.join("nested/deeper/tasks.json"), b"[]").unwrap();

        remove_dir_tree(&dir).unwrap();

        assert!(!dir.exists());
        assert!(tmp.path().exists());
    }

    #[test]
    fn refuses_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("not_a_dir");
        fs::write(&file, b"x").unwrap();

        let err = remove_dir_tree(&file).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
        assert!(file.exists());
    }

    #[test]
    fn missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = remove_dir_tree(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_refused_and_left_alone() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = remove_dir_tree(&link).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("symbolic link"));
        assert!(path_present(&link).unwrap());
        assert!(target.join("keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_absent() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();

        assert!(!path_present(&link).unwrap());
    }

    #[test]
    fn presence_check_does_not_create_anything() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        assert!(!path_present(&missing).unwrap());
        assert!(!missing.exists());
    }

    #[test]
    fn size_sums_all_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("a"), vec![0u8; 100]).unwrap();
        fs::write(tmp.path().join("sub/b"), vec![0u8; 28]).unwrap();

        assert_eq!(calculate_dir_size(tmp.path()), 128);
    }

    #[test]
    fn human_sizes() {
        assert_eq!(bytes_to_human(512), "512 bytes");
        assert_eq!(bytes_to_human(1536), "1.50 KB");
        assert_eq!(bytes_to_human(10 * 1024 * 1024), "10.00 MB");
        assert_eq!(bytes_to_human(3 * 1024 * 1024 * 1024), "3.00 GB");
    }
}
