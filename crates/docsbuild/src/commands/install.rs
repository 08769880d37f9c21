//! Generator install command.

use std::path::Path;

use anyhow::Result;
use docsbuild_core::{deps, InstallOutcome, InstallReport};

use crate::settings::load_build_config;

/// Run the install command. Failed steps are reported but never fail the command.
pub fn run(config_path: &Path) -> Result<()> {
    let report = install_from(config_path)?;

    if report.is_clean() {
        tracing::info!("Dependencies ready");
    } else {
        tracing::warn!("Some dependencies could not be installed");
    }

    Ok(())
}

fn install_from(config_path: &Path) -> Result<InstallReport> {
    let config = load_build_config(config_path)?;
    let report = deps::install(&config.dependencies);

    for step in &report.steps {
        match &step.outcome {
            InstallOutcome::Installed => tracing::info!("{}: installed", step.name),
            InstallOutcome::Skipped => tracing::info!("{}: skipped", step.name),
            InstallOutcome::Failed(message) => {
                tracing::warn!("{}: failed ({})", step.name, message)
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn failures_are_reported_not_returned() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docsbuild.toml");
        fs::write(
            &path,
            r#"
[dependencies]
system = ["docsbuild-no-such-package-manager"]
installer = []
"#,
        )
        .unwrap();

        let report = install_from(&path).unwrap();

        assert!(matches!(report.steps[0].outcome, InstallOutcome::Failed(_)));
        assert_eq!(report.steps[1].outcome, InstallOutcome::Skipped);
        assert!(!report.is_clean());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docsbuild.toml");
        fs::write(&path, "[dependencies]\nsystem = \"apt-get\"\n").unwrap();

        assert!(install_from(&path).is_err());
    }
}
