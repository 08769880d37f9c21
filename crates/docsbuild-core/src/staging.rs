//! Staging directory reset.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// What was found at the staging path before it was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingOutcome {
    /// Nothing existed
    Nothing,
    /// A regular file was unlinked
    File,
    /// A symbolic link was unlinked, its target left alone
    Symlink,
    /// A directory tree was removed
    Directory,
}

/// Remove whatever sits at `path` without following symlinks.
pub fn remove(path: &Path) -> Result<StagingOutcome, BuildError> {
    let wrap = |source: io::Error| BuildError::Staging {
        path: path.to_path_buf(),
        source,
    };

    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StagingOutcome::Nothing),
        Err(e) => return Err(wrap(e)),
    };

    let file_type = meta.file_type();
    let outcome = if file_type.is_symlink() {
        remove_symlink(path).map_err(wrap)?;
        StagingOutcome::Symlink
    } else if file_type.is_dir() {
        fs::remove_dir_all(path).map_err(wrap)?;
        StagingOutcome::Directory
    } else {
        fs::remove_file(path).map_err(wrap)?;
        StagingOutcome::File
    };

    tracing::debug!("Removed {:?} at {}", outcome, path.display());
    Ok(outcome)
}

/// Remove the staging entry and recreate it as an empty directory.
pub fn reset(path: &Path) -> Result<StagingOutcome, BuildError> {
    let outcome = remove(path)?;

    fs::create_dir_all(path).map_err(|source| BuildError::Staging {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(outcome)
}

#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    // Directory links on Windows are unlinked with remove_dir
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}
