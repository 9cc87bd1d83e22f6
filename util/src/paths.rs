use crate::config;
use std::{fs, io, path::{Path, PathBuf}};

/// Ensure the parent directory of a *file path* exists (no-op if none).
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Returns true when `value` is already a database URL rather than a file path.
pub fn is_database_url(value: &str) -> bool {
    value.starts_with("sqlite:") || value.starts_with("postgres://") || value.starts_with("mysql://")
}

/// Resolves a `DATABASE_PATH` value into a connection URL.
///
/// DSNs are returned as-is. Plain paths become `sqlite://<path>?mode=rwc` so the
/// file is created on first connect; the parent directory is created here
/// because SQLite won't create intermediate dirs.
pub fn database_url_for(path_or_url: &str) -> io::Result<String> {
    if is_database_url(path_or_url) {
        return Ok(path_or_url.to_string());
    }
    ensure_parent_dir(path_or_url)?;
    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}

/// Connection URL for the configured database, from `config::database_path()`.
pub fn database_url() -> io::Result<String> {
    database_url_for(&config::database_path())
}

/// The SQLite file behind `DATABASE_PATH`, or `None` when it is a non-file DSN.
pub fn database_file() -> Option<PathBuf> {
    let path = config::database_path();
    if is_database_url(&path) {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
