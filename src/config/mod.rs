//! Project configuration store.
//!
//! Projects may carry a `project.toml` at their root describing the
//! application. The bundler queries it through the [`ConfigStore`] trait
//! using dotted keys such as `project.bundler.name` or `project.version`,
//! so the core never depends on how the values were loaded.

use crate::error::{BundlerError, Result};
use std::path::Path;

/// Name of the per-project configuration file.
pub const MANIFEST_FILE: &str = "project.toml";

/// Read access to project-level configuration values.
pub trait ConfigStore {
    /// Looks up a dotted key (e.g. `project.bundler.name`) and returns the
    /// value if it is present and a string.
    fn get(&self, key: &str) -> Option<String>;
}

/// Configuration store backed by the project's `project.toml`.
///
/// A missing manifest file is not an error: the store is simply empty and
/// every lookup misses. An unparseable manifest is surfaced immediately.
#[derive(Debug, Default)]
pub struct ManifestStore {
    root: Option<toml::Value>,
}

impl ManifestStore {
    /// Loads the manifest from `<project_root>/project.toml`.
    pub async fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} at {}", MANIFEST_FILE, project_root.display());
                return Ok(Self { root: None });
            }
            Err(source) => {
                return Err(BundlerError::Io {
                    action: "reading project manifest".into(),
                    path,
                    source,
                });
            }
        };

        // parse as a document: Value::from_str only accepts a bare value
        let root = text
            .parse::<toml::Table>()
            .map_err(|source| BundlerError::Manifest { path, source })?;

        Ok(Self {
            root: Some(toml::Value::Table(root)),
        })
    }

    /// Creates a store from an already-parsed TOML document.
    pub fn from_table(root: toml::Table) -> Self {
        Self {
            root: Some(toml::Value::Table(root)),
        }
    }
}

impl ConfigStore for ManifestStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut node = self.root.as_ref()?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str().map(str::to_string)
    }
}
