//! Core Settings struct for one bundling run.

use super::ProjectIdentity;
use std::path::{Path, PathBuf};

/// Resolved configuration for one bundling run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder) once all
/// collaborator inputs (arguments, project manifest) have been resolved.
/// Immutable afterwards.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Root of the project being bundled.
    project_root: PathBuf,

    /// Directory bundles are written into. Already created and validated
    /// by [`paths::resolve_output_directory`](crate::bundler::paths::resolve_output_directory).
    output_dir: PathBuf,

    /// Resolved application name and version.
    identity: ProjectIdentity,

    /// Runtime binary copied into the bundle next to the launcher.
    runtime_binary: PathBuf,
}

impl Settings {
    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the resolved project identity.
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// Returns the application name.
    pub fn product_name(&self) -> &str {
        &self.identity.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.identity.version
    }

    /// Returns the path the runtime binary is copied from.
    pub fn runtime_binary(&self) -> &Path {
        &self.runtime_binary
    }

    /// The launcher entry point name: the product name with every character
    /// outside `[A-Za-z0-9]` stripped.
    pub fn entry_script_name(&self) -> String {
        self.identity
            .name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        project_root: PathBuf,
        output_dir: PathBuf,
        identity: ProjectIdentity,
        runtime_binary: PathBuf,
    ) -> Self {
        Self {
            project_root,
            output_dir,
            identity,
            runtime_binary,
        }
    }
}
