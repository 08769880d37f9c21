//! External site generator invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::GeneratorConfig;
use crate::error::BuildError;

/// Run the generator inside `source_dir` and return the site it wrote.
///
/// Blocks until the child exits. Its stdout and stderr are inherited so the
/// generator's own diagnostics reach the terminal.
pub fn run(config: &GeneratorConfig, source_dir: &Path) -> Result<PathBuf, BuildError> {
    if !source_dir.is_dir() {
        return Err(BuildError::SourceNotFound(source_dir.to_path_buf()));
    }

    let command = config.command_line();
    tracing::info!("Running `{}` in {}", command, source_dir.display());

    let status = Command::new(&config.program)
        .args(&config.args)
        .current_dir(source_dir)
        .status()
        .map_err(|source| BuildError::GeneratorSpawn {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(BuildError::GeneratorFailed {
            command,
            code: status.code(),
        });
    }

    let site = source_dir.join(&config.site_dir);
    if !site.is_dir() {
        return Err(BuildError::SiteNotFound(site));
    }

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn shell(script: &str) -> GeneratorConfig {
        GeneratorConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            site_dir: PathBuf::from("site"),
        }
    }

    #[test]
    fn missing_source_fails_before_spawning() {
        let temp = tempdir().unwrap();
        let err = run(
            &GeneratorConfig::default(),
            &temp.path().join("docs").join("en"),
        )
        .unwrap_err();

        assert!(matches!(err, BuildError::SourceNotFound(_)));
    }

    #[test]
    fn unknown_program_is_a_spawn_error() {
        let temp = tempdir().unwrap();
        let config = GeneratorConfig {
            program: "docsbuild-no-such-generator".to_string(),
            ..Default::default()
        };

        let err = run(&config, temp.path()).unwrap_err();
        assert!(matches!(err, BuildError::GeneratorSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_source_dir_and_returns_site() {
        let temp = tempdir().unwrap();
        let script = "mkdir -p site && pwd > site/where.txt";

        let site = run(&shell(script), temp.path()).unwrap();

        assert_eq!(site, temp.path().join("site"));
        let recorded = fs::read_to_string(site.join("where.txt")).unwrap();
        assert_eq!(
            Path::new(recorded.trim()).canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_carries_code() {
        let temp = tempdir().unwrap();

        let err = run(&shell("exit 7"), temp.path()).unwrap_err();
        match err {
            BuildError::GeneratorFailed { command, code } => {
                assert_eq!(command, "sh -c exit 7");
                assert_eq!(code, Some(7));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn success_without_output_is_an_error() {
        let temp = tempdir().unwrap();

        let err = run(&shell("true"), temp.path()).unwrap_err();
        assert!(matches!(err, BuildError::SiteNotFound(_)));
    }
}
