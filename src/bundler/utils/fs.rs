//! File system helpers for bundling.
//!
//! Thin wrappers over `tokio::fs` that attach bundler error context and
//! keep directory creation idempotent.

use crate::error::{BundlerError, ErrorExt, Result};
use std::path::Path;
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Idempotent: succeeds when the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        return Err(BundlerError::Io {
            action: "copying file".into(),
            path: from.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "source does not exist"),
        });
    }
    if !from.is_file() {
        return Err(BundlerError::Io {
            action: "copying file".into(),
            path: from.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "source is not a file",
            ),
        });
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    Ok(())
}

/// Marks a file executable for owner, group and other.
///
/// No-op on platforms without unix permission bits.
#[cfg(unix)]
pub async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path)
        .await
        .fs_context("reading file permissions", path)?;
    let mut perms = metadata.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
        .await
        .fs_context("marking file executable", path)
}

/// Marks a file executable for owner, group and other.
///
/// No-op on platforms without unix permission bits.
#[cfg(not(unix))]
pub async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes text content to a file.
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .fs_context("writing file", path)
}
