//! Working directory validation.

use std::path::Path;

use crate::error::BuildError;

/// Check that `dir` is named `expected`.
///
/// Runs before anything touches the filesystem so a build started from the
/// wrong place leaves no trace. `None` disables the check.
pub fn validate_working_dir(dir: &Path, expected: Option<&str>) -> Result<(), BuildError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    // "." and ".." have no file name until resolved
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let actual = resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if actual == expected {
        tracing::debug!("Working directory {} accepted", resolved.display());
        Ok(())
    } else {
        Err(BuildError::WrongWorkingDir {
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Refuse a staging directory that is, or sits above, the source directory.
///
/// Paths are compared as given and again after canonicalizing. A staging
/// symlink is only ever unlinked, so its target is not compared.
pub fn check_staging(source_dir: &Path, staging_dir: &Path) -> Result<(), BuildError> {
    let lexical = source_dir.starts_with(staging_dir);
    let is_link = std::fs::symlink_metadata(staging_dir)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    let resolved = !is_link
        && match (source_dir.canonicalize(), staging_dir.canonicalize()) {
            (Ok(source), Ok(staging)) => source.starts_with(staging),
            _ => false,
        };

    if lexical || resolved {
        return Err(BuildError::StagingContainsSource {
            staging: staging_dir.to_path_buf(),
            source_dir: source_dir.to_path_buf(),
        });
    }

    Ok(())
}
