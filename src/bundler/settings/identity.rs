//! Project identity resolution.

use crate::config::ConfigStore;
use crate::error::{BundlerError, Result};

/// Resolved application name and version.
///
/// Both fields are non-empty; resolution fails otherwise. Immutable for the
/// duration of one bundling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// Human-readable application name.
    pub name: String,

    /// Version string, e.g. "1.2.0".
    pub version: String,
}

impl ProjectIdentity {
    /// Resolves both identity fields from explicit overrides with fallback
    /// to the project configuration store.
    pub fn resolve(
        explicit_name: Option<&str>,
        explicit_version: Option<&str>,
        store: &dyn ConfigStore,
    ) -> Result<Self> {
        let name = resolve_field(
            "name",
            explicit_name,
            store,
            &["project.bundler.name", "project.name"],
        )?;
        let version = resolve_field(
            "version",
            explicit_version,
            store,
            &["project.bundler.version", "project.version"],
        )?;
        Ok(Self { name, version })
    }
}

/// Resolves a single identity field.
///
/// An explicit non-empty value wins. Otherwise the fallback keys are queried
/// in order and the first non-empty hit is returned. When nothing resolves,
/// the error names the unresolved field.
pub fn resolve_field(
    field: &str,
    explicit: Option<&str>,
    store: &dyn ConfigStore,
    fallback_keys: &[&str],
) -> Result<String> {
    if let Some(value) = explicit {
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }

    for key in fallback_keys {
        if let Some(value) = store.get(key) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
    }

    Err(BundlerError::Configuration(format!(
        "could not resolve project {field}: pass --project-{field} or set it in project.toml"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestStore;

    fn store(text: &str) -> ManifestStore {
        ManifestStore::from_table(text.parse().expect("valid toml"))
    }

    #[test]
    fn explicit_value_wins_over_configuration() {
        let store = store("[project]\nname = \"configured\"\n");
        let name = resolve_field("name", Some("explicit"), &store, &["project.name"])
            .expect("resolve");
        assert_eq!(name, "explicit");
    }

    #[test]
    fn empty_explicit_value_falls_through() {
        let store = store("[project]\nname = \"configured\"\n");
        let name =
            resolve_field("name", Some(""), &store, &["project.name"]).expect("resolve");
        assert_eq!(name, "configured");
    }

    #[test]
    fn fallback_chain_is_queried_in_order() {
        let store = store(
            "[project]\nname = \"generic\"\n[project.bundler]\nname = \"bundler scoped\"\n",
        );
        let identity =
            ProjectIdentity::resolve(None, Some("1.0.0"), &store).expect("resolve");
        assert_eq!(identity.name, "bundler scoped");
    }

    #[test]
    fn unresolved_field_names_the_field() {
        let store = ManifestStore::default();
        let err = ProjectIdentity::resolve(None, Some("1.0.0"), &store).unwrap_err();
        match err {
            BundlerError::Configuration(msg) => assert!(msg.contains("name")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn version_resolves_from_generic_project_key() {
        let store = store("[project]\nname = \"app\"\nversion = \"1.2.0\"\n");
        let identity = ProjectIdentity::resolve(None, None, &store).expect("resolve");
        assert_eq!(identity.version, "1.2.0");
    }
}
