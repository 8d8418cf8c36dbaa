//! Platform-specific bundle assembly.
//!
//! Two concrete variants share one contract: given the resolved settings,
//! produce a platform-native bundle under the output directory and return
//! its path, or `None` when the user declined to replace an existing one.
//! The variant is selected once, here, and dispatched by match.

pub mod macos;
pub mod windows;

use crate::bundler::replace::Confirm;
use crate::bundler::settings::Settings;
use crate::error::{BundlerError, Result};
use std::path::{Path, PathBuf};

/// Name of the entry resource the launcher starts the runtime against.
pub const ENTRY_RESOURCE: &str = "main.visu";

/// Supported bundle platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS `.app` bundle
    MacOs,
    /// Windows application folder
    Windows,
}

impl Platform {
    /// Parses an explicit platform value.
    ///
    /// Accepts both the user-facing names and the host identifiers reported
    /// by the platforms themselves (`darwin`, `win32`).
    pub fn from_value(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "macos" | "darwin" => Ok(Self::MacOs),
            "windows" | "win32" => Ok(Self::Windows),
            other => Err(BundlerError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Detects the platform from the running host.
    pub fn detect() -> Result<Self> {
        Self::detect_from(std::env::consts::OS)
    }

    fn detect_from(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Self::MacOs),
            "windows" => Ok(Self::Windows),
            other => Err(BundlerError::UnsupportedPlatform(format!(
                "host platform {other} has no bundle variant; pass --os"
            ))),
        }
    }

    /// File name the runtime binary carries inside the bundle.
    pub fn runtime_name(&self) -> &'static str {
        match self {
            Self::MacOs => "visu",
            Self::Windows => "visu.exe",
        }
    }
}

/// Output location of one bundling run.
///
/// `bundle_path` is derived deterministically from the output root, the
/// platform, and the product name. Created once per run; never mutated.
#[derive(Debug, Clone)]
pub struct BundleTarget {
    /// Directory the bundle is created in.
    pub output_root: PathBuf,

    /// Full path of the bundle root (e.g. `<output>/<Name>.app`).
    pub bundle_path: PathBuf,

    /// Selected platform variant.
    pub platform: Platform,
}

impl BundleTarget {
    /// Derives the bundle target for a product name.
    pub fn new(platform: Platform, output_root: &Path, product_name: &str) -> Self {
        let bundle_path = match platform {
            Platform::MacOs => output_root.join(format!("{product_name}.app")),
            Platform::Windows => output_root.join(product_name),
        };
        Self {
            output_root: output_root.to_path_buf(),
            bundle_path,
            platform,
        }
    }
}

/// Assembles a bundle for the selected platform.
///
/// Returns the bundle path, or `None` when an existing bundle was kept
/// because the user declined the overwrite prompt (a clean abort, not an
/// error).
pub async fn assemble(
    platform: Platform,
    settings: &Settings,
    confirm: &dyn Confirm,
) -> Result<Option<PathBuf>> {
    match platform {
        Platform::MacOs => macos::bundle_project(settings, confirm).await,
        Platform::Windows => windows::bundle_project(settings, confirm).await,
    }
}

/// Renders a handlebars template with escaping disabled.
///
/// The rendered artifacts are shell scripts and XML written verbatim, so
/// HTML escaping would corrupt them.
pub(crate) fn render(
    name: &str,
    template: &str,
    data: &std::collections::BTreeMap<&str, String>,
) -> Result<String> {
    let mut handlebars = handlebars::Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string(name, template)
        .map_err(|e| BundlerError::Template(format!("failed to register {name} template: {e}")))?;
    handlebars
        .render(name, data)
        .map_err(|e| BundlerError::Template(format!("failed to render {name} template: {e}")))
}

/// Formats a version with exactly four numeric parts, zero-padding shorter
/// versions and truncating longer ones.
///
/// - "1" -> "1.0.0.0"
/// - "1.2.3" -> "1.2.3.0"
/// - "1.2.3.4.5" -> "1.2.3.4"
pub(crate) fn format_version_quad(version: &str) -> String {
    let mut parts = version.split('.');
    let mut quad = Vec::with_capacity(4);
    for _ in 0..4 {
        quad.push(parts.next().unwrap_or("0"));
    }
    quad.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_map_to_variants() {
        assert_eq!(Platform::from_value("macos").expect("macos"), Platform::MacOs);
        assert_eq!(Platform::from_value("Darwin").expect("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_value("win32").expect("win32"), Platform::Windows);
        assert_eq!(
            Platform::from_value("windows").expect("windows"),
            Platform::Windows
        );
    }

    #[test]
    fn unknown_values_are_unsupported() {
        let err = Platform::from_value("beos").unwrap_err();
        assert!(matches!(err, BundlerError::UnsupportedPlatform(_)));
    }

    #[test]
    fn unrecognized_host_is_unsupported() {
        let err = Platform::detect_from("illumos").unwrap_err();
        assert!(matches!(err, BundlerError::UnsupportedPlatform(_)));
    }

    #[test]
    fn bundle_path_is_derived_per_platform() {
        let out = Path::new("/proj/dist");
        let mac = BundleTarget::new(Platform::MacOs, out, "Play Demo");
        assert_eq!(mac.bundle_path, Path::new("/proj/dist/Play Demo.app"));

        let win = BundleTarget::new(Platform::Windows, out, "Play Demo");
        assert_eq!(win.bundle_path, Path::new("/proj/dist/Play Demo"));
    }

    #[test]
    fn version_quad_pads_and_truncates() {
        assert_eq!(format_version_quad("1"), "1.0.0.0");
        assert_eq!(format_version_quad("1.2"), "1.2.0.0");
        assert_eq!(format_version_quad("1.2.3"), "1.2.3.0");
        assert_eq!(format_version_quad("1.2.3.4"), "1.2.3.4");
        assert_eq!(format_version_quad("1.2.3.4.5"), "1.2.3.4");
    }
}
