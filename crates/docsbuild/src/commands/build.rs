//! Documentation build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use docsbuild_core::{BuildConfig, DocsBuilder};

use crate::settings::load_build_config;

#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// Documentation source directory (defaults to config or "docs/en")
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory (defaults to config or "site/en")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Staging directory reset before building (defaults to config or "site")
    #[arg(long)]
    pub staging: Option<PathBuf>,

    /// Install the generator before building
    #[arg(long)]
    pub install_deps: bool,

    /// Keep the staging directory as it is
    #[arg(long)]
    pub no_clean: bool,

    /// Refuse to run unless the working directory has this name
    #[arg(long)]
    pub expect_dir: Option<String>,

    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    /// Apply command-line overrides on top of file settings.
    fn apply(self, mut config: BuildConfig) -> BuildConfig {
        if let Some(source) = self.source {
            config.source_dir = source;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(staging) = self.staging {
            config.staging_dir = staging;
        }
        if self.install_deps {
            config.install_deps = true;
        }
        if self.no_clean {
            config.clean = false;
        }
        if self.expect_dir.is_some() {
            config.expected_dir = self.expect_dir;
        }
        config
    }
}

/// Run the build command.
pub fn run(config_path: &Path, args: BuildArgs) -> Result<()> {
    tracing::info!("Building documentation...");

    let json = args.json;
    let config = args.apply(load_build_config(config_path)?);
    let builder = DocsBuilder::new(config);

    tracing::debug!("Build settings: {:?}", builder.config());

    let report = builder.run()?;

    tracing::info!(
        "Copied {} files ({} bytes) in {}ms",
        report.files,
        report.bytes,
        report.duration_ms
    );
    tracing::info!("Output: {}", report.output_dir.display());

    if json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
