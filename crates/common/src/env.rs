//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::info;

/// Local file path behind a `sqlite:` URL; `None` for in-memory or non-sqlite URLs.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a sqlite database file exists; no-op for other backends.
pub async fn ensure_database_dir(url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(url) else { return Ok(()) };
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else { return Ok(()) };
    if tokio::fs::metadata(parent).await.is_err() {
        create_dir(parent).await?;
        info!(dir = %parent.display(), "created database directory");
    }
    Ok(())
}

async fn create_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))
}
