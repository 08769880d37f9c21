//! Build configuration.

use std::path::{Path, PathBuf};

/// Configuration for a documentation build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the documentation sources and generator config
    pub source_dir: PathBuf,

    /// Staging directory, removed and recreated before each build
    pub staging_dir: PathBuf,

    /// Final location of the generated site
    pub output_dir: PathBuf,

    /// External site generator invocation
    pub generator: GeneratorConfig,

    /// Commands used to install the generator
    pub dependencies: DependencyConfig,

    /// Attempt dependency installation before building
    pub install_deps: bool,

    /// Reset the staging directory before building
    pub clean: bool,

    /// Required name of the working directory, if any
    pub expected_dir: Option<String>,

    /// Directory that relative paths resolve against
    pub working_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs/en"),
            staging_dir: PathBuf::from("site"),
            output_dir: PathBuf::from("site/en"),
            generator: GeneratorConfig::default(),
            dependencies: DependencyConfig::default(),
            install_deps: false,
            clean: true,
            expected_dir: None,
            working_dir: PathBuf::from("."),
        }
    }
}

impl BuildConfig {
    /// Resolve a configured path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source_dir)
    }

    pub fn staging_path(&self) -> PathBuf {
        self.resolve(&self.staging_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }
}

/// How to invoke the static-site generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Executable name or path
    pub program: String,

    /// Arguments passed to the executable
    pub args: Vec<String>,

    /// Output subdirectory the generator writes, relative to the source dir
    pub site_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "mkdocs".to_string(),
            args: vec!["build".to_string()],
            site_dir: PathBuf::from("site"),
        }
    }
}

impl GeneratorConfig {
    /// Render the invocation as a single command line for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Commands that install the generator and its theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyConfig {
    /// OS package manager command providing the Python installer
    pub system: Vec<String>,

    /// Python installer command prefix; packages are appended
    pub installer: Vec<String>,

    /// Packages to install or upgrade
    pub packages: Vec<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            system: ["apt-get", "install", "-y", "python3-pip"]
                .map(String::from)
                .to_vec(),
            installer: ["pip3", "install", "--upgrade"].map(String::from).to_vec(),
            packages: ["mkdocs", "mkdocs-material"].map(String::from).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = BuildConfig::default();
        assert_eq!(config.source_path(), Path::new("./docs/en"));
        assert_eq!(config.staging_path(), Path::new("./site"));
        assert_eq!(config.output_path(), Path::new("./site/en"));
        assert!(config.clean);
        assert!(!config.install_deps);
    }

    #[test]
    fn absolute_paths_ignore_working_dir() {
        let root = std::env::temp_dir();
        let config = BuildConfig {
            output_dir: root.join("out"),
            working_dir: PathBuf::from("/somewhere/else"),
            ..Default::default()
        };
        assert_eq!(config.output_path(), root.join("out"));
        assert_eq!(
            config.source_path(),
            Path::new("/somewhere/else").join("docs/en")
        );
    }

    #[test]
    fn command_line_joins_program_and_args() {
        assert_eq!(GeneratorConfig::default().command_line(), "mkdocs build");
    }
}
