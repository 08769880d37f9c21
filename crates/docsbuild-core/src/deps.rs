//! Best-effort installation of the site generator.
//!
//! Every step yields a [`Result`] that is folded into an [`InstallReport`]
//! and logged. Nothing here can fail a build.

use std::process::Command;

use serde::Serialize;

use crate::config::DependencyConfig;
use crate::error::exit_label;

/// Why an install step did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}", exit_label(.code))]
    Exit { command: String, code: Option<i32> },
}

/// Result of one install step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum InstallOutcome {
    Installed,
    Skipped,
    Failed(String),
}

/// One attempted install command.
#[derive(Debug, Clone, Serialize)]
pub struct InstallStep {
    pub name: &'static str,
    pub command: String,
    pub outcome: InstallOutcome,
}

/// Outcome of all install steps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    pub steps: Vec<InstallStep>,
}

impl InstallReport {
    /// True when no step failed.
    pub fn is_clean(&self) -> bool {
        self.steps
            .iter()
            .all(|s| !matches!(s.outcome, InstallOutcome::Failed(_)))
    }
}

/// Install the OS prerequisite, then the generator packages.
pub fn install(config: &DependencyConfig) -> InstallReport {
    let mut report = InstallReport::default();

    report.steps.push(attempt("system", config.system.clone()));

    // Package names alone must never be run as a command
    let packages = if config.packages.is_empty() || config.installer.is_empty() {
        Vec::new()
    } else {
        config
            .installer
            .iter()
            .chain(config.packages.iter())
            .cloned()
            .collect()
    };
    report.steps.push(attempt("packages", packages));

    report
}

fn attempt(name: &'static str, argv: Vec<String>) -> InstallStep {
    let command = argv.join(" ");

    if argv.is_empty() {
        tracing::debug!("No {} install command configured", name);
        return InstallStep {
            name,
            command,
            outcome: InstallOutcome::Skipped,
        };
    }

    tracing::info!("Installing {}: {}", name, command);

    let outcome = match run(&argv) {
        Ok(()) => InstallOutcome::Installed,
        Err(e) => {
            tracing::warn!("Ignoring failed {} install: {}", name, e);
            InstallOutcome::Failed(e.to_string())
        }
    };

    InstallStep {
        name,
        command,
        outcome,
    }
}

fn run(argv: &[String]) -> Result<(), InstallError> {
    let (program, args) = argv.split_first().ok_or(InstallError::EmptyCommand)?;
    let command = argv.join(" ");

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| InstallError::Spawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallError::Exit {
            command,
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_program_is_recorded_not_raised() {
        let report = install(&DependencyConfig {
            system: argv(&["docsbuild-no-such-package-manager", "install"]),
            installer: argv(&["docsbuild-no-such-pip", "install"]),
            packages: argv(&["mkdocs"]),
        });

        assert_eq!(report.steps.len(), 2);
        assert!(!report.is_clean());
        assert!(matches!(report.steps[0].outcome, InstallOutcome::Failed(_)));
        assert_eq!(report.steps[1].command, "docsbuild-no-such-pip install mkdocs");
    }

    #[test]
    fn empty_commands_are_skipped() {
        let report = install(&DependencyConfig {
            system: Vec::new(),
            installer: argv(&["pip3", "install"]),
            packages: Vec::new(),
        });

        assert!(report.is_clean());
        assert!(report
            .steps
            .iter()
            .all(|s| s.outcome == InstallOutcome::Skipped));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_a_failed_step() {
        let report = install(&DependencyConfig {
            system: argv(&["sh", "-c", "exit 3"]),
            installer: argv(&["true"]),
            packages: argv(&["mkdocs"]),
        });

        assert_eq!(
            report.steps[0].outcome,
            InstallOutcome::Failed("`sh -c exit 3` exited with status 3".into())
        );
        assert_eq!(report.steps[1].outcome, InstallOutcome::Installed);
    }

    #[cfg(unix)]
    #[test]
    fn packages_without_installer_are_not_executed() {
        let temp = tempfile::tempdir().unwrap();
        let marker = temp.path().join("ran");

        let report = install(&DependencyConfig {
            system: Vec::new(),
            installer: Vec::new(),
            packages: vec!["touch".into(), marker.display().to_string()],
        });

        assert_eq!(report.steps[1].name, "packages");
        assert_eq!(report.steps[1].outcome, InstallOutcome::Skipped);
        assert!(!marker.exists());
    }
}
