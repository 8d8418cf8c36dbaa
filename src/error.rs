//! Error types for bundling operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// A required parameter could not be resolved (output parent directory,
    /// project name or version, settings preconditions).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A filesystem operation failed. Never retried; may leave partial
    /// state on disk.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What the bundler was doing when the operation failed
        action: String,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Platform neither explicit nor detectable, or matches no known variant.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The project manifest exists but is not valid TOML.
    #[error("invalid project manifest {}: {source}", path.display())]
    Manifest {
        /// Path of the manifest file
        path: PathBuf,
        /// Underlying TOML parse error
        source: toml::de::Error,
    },

    /// Template registration or rendering failed.
    #[error("template error: {0}")]
    Template(String),
}

/// Extension trait attaching filesystem context to `io::Result`.
pub trait ErrorExt<T> {
    /// Converts an IO error into a [`BundlerError::Io`] carrying the action
    /// being performed and the path it was performed on.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|source| BundlerError::Io {
            action: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_carries_action_and_path() {
        let res: std::io::Result<()> = Err(std::io::Error::other("boom"));
        let err = res
            .fs_context("creating bundle skeleton", Path::new("/tmp/x"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("creating bundle skeleton"));
        assert!(msg.contains("/tmp/x"));
    }
}
