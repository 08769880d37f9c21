//! Build errors.

use std::path::PathBuf;

/// Errors that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Working directory {actual:?} is not {expected:?}")]
    WrongWorkingDir { expected: String, actual: String },

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error(
        "Staging directory {} contains source directory {}",
        staging.display(),
        source_dir.display()
    )]
    StagingContainsSource {
        staging: PathBuf,
        source_dir: PathBuf,
    },

    #[error("Failed to reset staging directory {}: {source}", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start generator `{command}`: {source}")]
    GeneratorSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generator `{command}` exited with {}", exit_label(.code))]
    GeneratorFailed { command: String, code: Option<i32> },

    #[error("Generator produced no site at {}", .0.display())]
    SiteNotFound(PathBuf),

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Failed to copy {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_failure_names_exit_code() {
        let err = BuildError::GeneratorFailed {
            command: "mkdocs build".into(),
            code: Some(2),
        };
        assert_eq!(err.to_string(), "Generator `mkdocs build` exited with status 2");
    }

    #[test]
    fn signal_termination_is_described() {
        let err = BuildError::GeneratorFailed {
            command: "mkdocs build".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
