//! Staging directory reset command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use docsbuild_core::{staging, workspace, StagingOutcome};

use crate::settings::load_build_config;

/// Run the clean command.
pub fn run(config_path: &Path, staging_dir: Option<PathBuf>) -> Result<()> {
    let (path, removed) = reset_staging(Path::new("."), config_path, staging_dir)?;

    tracing::info!("Reset {} (removed {:?})", path.display(), removed);

    Ok(())
}

/// Reset the staging directory under `root`, honouring an override.
fn reset_staging(
    root: &Path,
    config_path: &Path,
    staging_dir: Option<PathBuf>,
) -> Result<(PathBuf, StagingOutcome)> {
    let mut config = load_build_config(&root.join(config_path))?;
    config.working_dir = root.to_path_buf();
    if let Some(dir) = staging_dir {
        config.staging_dir = dir;
    }

    let path = config.staging_path();
    workspace::check_staging(&config.source_path(), &path)?;
    let removed = staging::reset(&path)?;

    Ok((path, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn override_replaces_configured_staging() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("site/en")).unwrap();
        fs::write(temp.path().join("site/en/index.html"), "keep").unwrap();
        fs::create_dir_all(temp.path().join("scratch/old")).unwrap();

        let (path, removed) = reset_staging(
            temp.path(),
            Path::new("docsbuild.toml"),
            Some(PathBuf::from("scratch")),
        )
        .unwrap();

        assert_eq!(path, temp.path().join("scratch"));
        assert_eq!(removed, StagingOutcome::Directory);
        assert!(fs::read_dir(&path).unwrap().next().is_none());
        assert!(temp.path().join("site/en/index.html").exists());
    }

    #[test]
    fn configured_staging_is_used_without_override() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("docsbuild.toml"),
            "[docs]\nstaging = \"build\"\n",
        )
        .unwrap();
        fs::write(temp.path().join("build"), "stale").unwrap();

        let (path, removed) =
            reset_staging(temp.path(), Path::new("docsbuild.toml"), None).unwrap();

        assert_eq!(path, temp.path().join("build"));
        assert_eq!(removed, StagingOutcome::File);
        assert!(path.is_dir());
    }

    #[test]
    fn refuses_to_wipe_sources() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs/en")).unwrap();
        fs::write(temp.path().join("docs/en/mkdocs.yml"), "site_name: x\n").unwrap();

        let result = reset_staging(
            temp.path(),
            Path::new("docsbuild.toml"),
            Some(PathBuf::from("docs")),
        );

        assert!(result.is_err());
        assert!(temp.path().join("docs/en/mkdocs.yml").exists());
    }
}
