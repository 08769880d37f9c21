//! docsbuild CLI - build documentation with an external site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod settings;

use commands::build::BuildArgs;

#[derive(Parser)]
#[command(name = "docsbuild")]
#[command(about = "Build a documentation site and publish its output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to docsbuild.toml config file
    #[arg(short, long, default_value = "docsbuild.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site and copy it to the output directory (default)
    Build(BuildArgs),

    /// Remove and recreate the staging directory
    Clean {
        /// Staging directory (defaults to config or "site")
        #[arg(short, long)]
        staging: Option<PathBuf>,
    },

    /// Install the site generator (failures are reported, not fatal)
    Install,

    /// Create a config file and a starter documentation source
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Preview the published site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to the configured output)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command.unwrap_or_else(|| Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => {
            commands::build::run(&cli.config, args)?;
        }
        Commands::Clean { staging } => {
            commands::clean::run(&cli.config, staging)?;
        }
        Commands::Install => {
            commands::install::run(&cli.config)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Serve { port, dir, no_open } => {
            commands::serve::run(&cli.config, port, dir, !no_open).await?;
        }
    }

    Ok(())
}
