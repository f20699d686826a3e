//! File-level operations on managed config files
//!
//! Every operation works on a single path and is a plain sequence of
//! synchronous I/O calls. Concurrent invocations on the same path are not
//! coordinated; the last writer wins.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config;
use crate::document::ConfigFile;
use crate::error::ConfigError;

/// Load a config file
///
/// A missing file is not an error: it loads as an empty changelog and an
/// empty mapping, so edits can start from a file that does not exist yet.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ConfigFile, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "file absent, starting empty");
        return Ok(ConfigFile::default());
    }

    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let file = ConfigFile::parse(&text)?;

    debug!(
        path = %path.display(),
        entries = file.changelog.len(),
        properties = file.data.len(),
        "loaded config file"
    );
    Ok(file)
}

/// Overwrite a config file with the changelog followed by the data
pub fn save<P: AsRef<Path>>(path: P, file: &ConfigFile) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let text = file.render()?;

    fs::write(path, &text).map_err(|e| ConfigError::io(path, e))?;

    debug!(path = %path.display(), bytes = text.len(), "saved config file");
    Ok(())
}

/// Create a new file holding an empty mapping, creating parent directories
pub fn create<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();

    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
            debug!(dir = %parent.display(), "created parent directories");
        }
    }

    save(path, &ConfigFile::default())
}

/// Delete a config file
pub fn remove<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    fs::remove_file(path).map_err(|e| ConfigError::io(path, e))?;
    debug!(path = %path.display(), "removed config file");
    Ok(())
}

/// Copy a config file to `<path>.bak`, replacing any previous backup
///
/// The copy is byte-for-byte and carries over permissions and access and
/// modification times. Returns the backup path.
pub fn backup<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let target = config::backup_path(path);
    copy_with_metadata(path, &target).map_err(|e| ConfigError::io(&target, e))?;

    debug!(from = %path.display(), to = %target.display(), "backed up config file");
    Ok(target)
}

/// Copy contents, then timestamps, then permissions
///
/// Permissions go last so a read-only source does not block setting times.
fn copy_with_metadata(source: &Path, target: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;

    let mut reader = File::open(source)?;
    let mut writer = File::create(target)?;
    io::copy(&mut reader, &mut writer)?;

    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);
    writer.set_times(times)?;
    drop(writer);

    fs::set_permissions(target, metadata.permissions())
}
