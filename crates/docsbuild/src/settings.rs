//! Configuration file (docsbuild.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsbuild_core::BuildConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    docs: DocsSection,
    #[serde(default)]
    generator: GeneratorSection,
    #[serde(default)]
    dependencies: DependenciesSection,
    #[serde(default)]
    workspace: WorkspaceSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DocsSection {
    source: Option<PathBuf>,
    staging: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct GeneratorSection {
    program: Option<String>,
    args: Option<Vec<String>>,
    site_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DependenciesSection {
    #[serde(default)]
    install: bool,
    system: Option<Vec<String>>,
    installer: Option<Vec<String>>,
    packages: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct WorkspaceSection {
    /// Name the working directory must have
    expected_dir: Option<String>,
}

impl ConfigFile {
    /// Merge file values over the built-in defaults.
    pub fn into_build_config(self) -> BuildConfig {
        let mut config = BuildConfig::default();

        if let Some(source) = self.docs.source {
            config.source_dir = source;
        }
        if let Some(staging) = self.docs.staging {
            config.staging_dir = staging;
        }
        if let Some(output) = self.docs.output {
            config.output_dir = output;
        }

        if let Some(program) = self.generator.program {
            config.generator.program = program;
        }
        if let Some(args) = self.generator.args {
            config.generator.args = args;
        }
        if let Some(site_dir) = self.generator.site_dir {
            config.generator.site_dir = site_dir;
        }

        config.install_deps = self.dependencies.install;
        if let Some(system) = self.dependencies.system {
            config.dependencies.system = system;
        }
        if let Some(installer) = self.dependencies.installer {
            config.dependencies.installer = installer;
        }
        if let Some(packages) = self.dependencies.packages {
            config.dependencies.packages = packages;
        }

        config.expected_dir = self.workspace.expected_dir;
        config
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the config file and convert it into build settings.
pub fn load_build_config(path: &Path) -> Result<BuildConfig> {
    Ok(load_config(path)?.into_build_config())
}
