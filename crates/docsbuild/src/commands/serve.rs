//! Preview server for the published site.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

use crate::settings::load_build_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>, open: bool) -> Result<()> {
    let site = published_dir(Path::new("."), config_path, dir)?;

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Serving {} at http://{}", site.display(), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    if open {
        if let Err(e) = open::that(format!("http://{}", addr)) {
            tracing::debug!("Could not open browser: {}", e);
        }
    }

    let app = Router::new().fallback_service(ServeDir::new(&site));
    axum::serve(listener, app).await?;

    Ok(())
}

/// Pick the directory to preview: `dir` if given, else the configured
/// output, resolved against `root`. The directory must already exist.
fn published_dir(root: &Path, config_path: &Path, dir: Option<PathBuf>) -> Result<PathBuf> {
    let site = match dir {
        Some(dir) => root.join(dir),
        None => {
            let mut config = load_build_config(&root.join(config_path))?;
            config.working_dir = root.to_path_buf();
            config.output_path()
        }
    };

    if !site.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'docsbuild build' first.",
            site.display()
        );
    }

    Ok(site)
}
