//! Build pipeline for documentation sites rendered by an external generator.
//!
//! Validates the working directory, resets a staging directory, optionally
//! installs the generator, runs it, and publishes its output tree.

pub mod builder;
pub mod config;
pub mod deps;
pub mod error;
pub mod generator;
pub mod publish;
pub mod staging;
pub mod workspace;

pub use builder::{BuildReport, DocsBuilder};
pub use config::{BuildConfig, DependencyConfig, GeneratorConfig};
pub use deps::{InstallError, InstallOutcome, InstallReport, InstallStep};
pub use error::BuildError;
pub use publish::CopyStats;
pub use staging::StagingOutcome;
