//! Copy the generated site to its final location.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::BuildError;

/// Totals for a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
}

/// Copy the tree at `from` to `to`.
///
/// `to` must not exist; existing destinations are never merged into.
/// Parent directories of `to` are created. Symlinks are followed and copied
/// as regular files.
pub fn copy_tree(from: &Path, to: &Path) -> Result<CopyStats, BuildError> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(BuildError::DestinationExists(to.to_path_buf()));
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Copy {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut stats = CopyStats::default();

    for entry in WalkDir::new(from).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| BuildError::Copy {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| from.to_path_buf()),
            source: e.into(),
        })?;

        let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let target = to.join(relative);
        let copy_err = |source| BuildError::Copy {
            path: entry.path().to_path_buf(),
            source,
        };

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(copy_err)?;
            stats.dirs += 1;
        } else {
            stats.bytes += fs::copy(entry.path(), &target).map_err(copy_err)?;
            stats.files += 1;
            tracing::debug!("Copied {}", relative.display());
        }
    }

    Ok(stats)
}

/// List the files below `root` relative to it, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}
