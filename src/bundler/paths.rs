//! Output directory resolution.

use crate::error::{BundlerError, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Default output directory name under the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Resolves and creates the output directory for a bundling run.
///
/// Without an explicit path the output defaults to `<project_root>/dist`.
/// The parent of the resolved directory must already exist; the directory
/// itself (including intermediate segments) is created when absent.
/// Idempotent: an already-existing output directory is not an error.
pub async fn resolve_output_directory(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<PathBuf> {
    let output = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_root.join(DEFAULT_OUTPUT_DIR),
    };

    match output.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.exists() => {}
        Some(parent) => {
            return Err(BundlerError::Configuration(format!(
                "parent of output directory does not exist: {}",
                parent.display()
            )));
        }
        None => {
            return Err(BundlerError::Configuration(format!(
                "output directory has no parent: {}",
                output.display()
            )));
        }
    }

    tokio::fs::create_dir_all(&output)
        .await
        .fs_context("creating output directory", &output)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_dist_under_project_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = resolve_output_directory(dir.path(), None)
            .await
            .expect("resolve");
        assert_eq!(out, dir.path().join("dist"));
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = resolve_output_directory(dir.path(), None)
            .await
            .expect("first");
        let second = resolve_output_directory(dir.path(), None)
            .await
            .expect("second");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_parent_is_a_configuration_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let explicit = dir.path().join("no/such/parent/out");
        let err = resolve_output_directory(dir.path(), Some(&explicit))
            .await
            .unwrap_err();
        assert!(matches!(err, BundlerError::Configuration(_)));
    }

    #[tokio::test]
    async fn explicit_directory_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let explicit = dir.path().join("out");
        let out = resolve_output_directory(dir.path(), Some(&explicit))
            .await
            .expect("resolve");
        assert!(out.is_dir());
    }
}
