//! Documentation build pipeline.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::config::BuildConfig;
use crate::deps::{self, InstallReport};
use crate::error::BuildError;
use crate::{generator, publish, staging, workspace};

/// Result of a build.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Where the site was published
    pub output_dir: PathBuf,

    /// Number of files copied
    pub files: usize,

    /// Total bytes copied
    pub bytes: u64,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Whether the staging directory was reset
    pub cleaned: bool,

    /// Dependency install attempts, when enabled
    pub dependencies: Option<InstallReport>,
}

impl BuildReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the generator and publishes its output.
pub struct DocsBuilder {
    config: BuildConfig,
}

impl DocsBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Validate, clean, install, generate, publish.
    pub fn run(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let config = &self.config;

        workspace::validate_working_dir(&config.working_dir, config.expected_dir.as_deref())?;

        if config.clean {
            let staging_dir = config.staging_path();
            workspace::check_staging(&config.source_path(), &staging_dir)?;
            let removed = staging::reset(&staging_dir)?;
            tracing::info!(
                "Reset staging directory {} (removed {:?})",
                staging_dir.display(),
                removed
            );
        }

        let dependencies = config.install_deps.then(|| {
            let report = deps::install(&config.dependencies);
            if !report.is_clean() {
                tracing::warn!("Dependency install incomplete, building anyway");
            }
            report
        });

        let site = generator::run(&config.generator, &config.source_path())?;

        let output_dir = config.output_path();
        let stats = publish::copy_tree(&site, &output_dir)?;

        Ok(BuildReport {
            output_dir,
            files: stats.files,
            bytes: stats.bytes,
            duration_ms: start.elapsed().as_millis() as u64,
            cleaned: config.clean,
            dependencies,
        })
    }
}
