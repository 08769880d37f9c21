//! Initialize a documentation project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::settings::load_build_config;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing docsbuild...");

    scaffold(Path::new("."), config_path, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'docsbuild' to build the site.");

    Ok(())
}

/// Write the config file and a starter MkDocs source under `root`.
fn scaffold(root: &Path, config_path: &Path, yes: bool) -> Result<()> {
    let config_path = root.join(config_path);
    if !config_path.exists() || yes {
        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let mut config = load_build_config(&config_path)?;
    config.working_dir = root.to_path_buf();
    let source = config.source_path();

    if source.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            source.display()
        );
        return Ok(());
    }
    fs::create_dir_all(&source).context("Failed to create docs directory")?;

    let mkdocs_path = source.join("mkdocs.yml");
    if !mkdocs_path.exists() || yes {
        fs::write(&mkdocs_path, DEFAULT_MKDOCS).context("Failed to write mkdocs.yml")?;
        tracing::info!("Created {}", mkdocs_path.display());
    }

    let pages = source.join("docs");
    fs::create_dir_all(&pages).context("Failed to create pages directory")?;

    let index_path = pages.join("index.md");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_INDEX).context("Failed to write index.md")?;
        tracing::info!("Created {}", index_path.display());
    }

    Ok(())
}

pub const DEFAULT_CONFIG: &str = r#"# docsbuild configuration

[docs]
# Directory holding mkdocs.yml
source = "docs/en"

# Reset before every build
staging = "site"

# Where the generated site is copied
output = "site/en"

[generator]
program = "mkdocs"
args = ["build"]

# Generator output, relative to the source directory
site_dir = "site"

[dependencies]
# Install the generator before building (failures are only logged)
install = false
packages = ["mkdocs", "mkdocs-material"]

[workspace]
# Refuse to build unless run from a directory with this name
# expected_dir = "my-project"
"#;

const DEFAULT_MKDOCS: &str = r#"site_name: Documentation
theme:
  name: material
nav:
  - Home: index.md
"#;

const DEFAULT_INDEX: &str = r#"# Welcome

This site is built with `docsbuild`.

## Building

```bash
docsbuild
```

The generated site is copied to `site/en`.
"#;
