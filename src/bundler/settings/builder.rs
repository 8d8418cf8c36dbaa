//! Builder for constructing Settings.

use super::{ProjectIdentity, Settings};
use crate::error::{BundlerError, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// All four fields are required; [`build`](SettingsBuilder::build) fails
/// with a configuration error naming the first missing one.
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    identity: Option<ProjectIdentity>,
    runtime_binary: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root to bundle.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resolved output directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resolved project identity.
    pub fn identity(mut self, identity: ProjectIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Sets the runtime binary source path.
    pub fn runtime_binary<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.runtime_binary = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any field is missing.
    pub fn build(self) -> Result<Settings> {
        Ok(Settings::new(
            self.project_root.ok_or_else(|| required("project_root"))?,
            self.output_dir.ok_or_else(|| required("output_dir"))?,
            self.identity.ok_or_else(|| required("identity"))?,
            self.runtime_binary
                .ok_or_else(|| required("runtime_binary"))?,
        ))
    }
}

fn required(field: &str) -> BundlerError {
    BundlerError::Configuration(format!("{field} is required"))
}
