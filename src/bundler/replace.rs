//! Confirm-guarded replacement of an existing bundle.

use crate::error::{BundlerError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Blocking yes/no confirmation collaborator.
///
/// The whole run suspends on [`ask`](Confirm::ask); declining cancels the
/// command with no side effects committed.
pub trait Confirm {
    /// Asks the user a yes/no question and blocks for the answer.
    fn ask(&self, question: &str) -> bool;
}

/// Checks for an existing bundle at `bundle_path` and removes it after
/// confirmation.
///
/// Returns `Ok(true)` when the caller may proceed: either nothing existed,
/// or the user confirmed and the tree was removed. Returns `Ok(false)` when
/// the user declined; nothing was touched and the caller must abort the
/// whole operation.
pub async fn replace_if_exists(bundle_path: &Path, confirm: &dyn Confirm) -> Result<bool> {
    // symlink_metadata: a dangling symlink at the target still counts
    if tokio::fs::symlink_metadata(bundle_path).await.is_err() {
        return Ok(true);
    }

    let question = format!(
        "{} already exists. Delete it and rebuild?",
        bundle_path.display()
    );
    if !confirm.ask(&question) {
        return Ok(false);
    }

    log::info!("removing existing bundle at {}", bundle_path.display());
    remove_tree(bundle_path).await?;
    Ok(true)
}

/// Recursively removes a file or directory tree.
///
/// Deletion is post-order: a directory is only removable once empty, so
/// children (files and symlinks) are removed strictly before their parent.
/// Symlinks are removed as entries, never followed. Any removal failure is
/// surfaced immediately; partial deletion is possible.
async fn remove_tree(path: &Path) -> Result<()> {
    let root = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<()> {
        for entry in WalkDir::new(&root).contents_first(true) {
            let entry = entry.map_err(walk_error)?;
            let file_type = entry.file_type();
            if file_type.is_dir() && !file_type.is_symlink() {
                std::fs::remove_dir(entry.path()).map_err(|source| BundlerError::Io {
                    action: "removing directory".into(),
                    path: entry.path().to_path_buf(),
                    source,
                })?;
            } else {
                std::fs::remove_file(entry.path()).map_err(|source| BundlerError::Io {
                    action: "removing file".into(),
                    path: entry.path().to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    })
    .await
    .map_err(|e| BundlerError::Io {
        action: "running removal task".into(),
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?
}

fn walk_error(err: walkdir::Error) -> BundlerError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    BundlerError::Io {
        action: "walking tree for removal".into(),
        path,
        source: err.into(),
    }
}
