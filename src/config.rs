//! File-format constants and derived paths

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Marker that starts every changelog line
pub const CHANGELOG_MARKER: char = '#';

/// Suffix appended to a file name to form its backup path
pub const BACKUP_SUFFIX: &str = ".bak";

/// Timestamp format used in changelog entries (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get the backup location for a file (`<path>.bak`)
///
/// The suffix is appended to the whole file name, so `c.yaml` becomes
/// `c.yaml.bak` rather than replacing the extension.
pub fn backup_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut name: OsString = path.as_ref().as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(backup_path("c.yaml"), PathBuf::from("c.yaml.bak"));
    }

    #[test]
    fn test_backup_path_keeps_directories() {
        assert_eq!(
            backup_path("/etc/app/settings.yml"),
            PathBuf::from("/etc/app/settings.yml.bak")
        );
    }

    #[test]
    fn test_backup_path_without_extension() {
        assert_eq!(backup_path("config"), PathBuf::from("config.bak"));
    }
}
