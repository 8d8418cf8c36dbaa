//! macOS `.app` bundle assembly.
//!
//! Produces the standard application layout:
//!
//! ```text
//! <Name>.app/
//!   Contents/
//!     Info.plist
//!     PkgInfo
//!     MacOS/<entry script>      (launcher, executable)
//!     MacOS/visu                (runtime binary, executable)
//!     Resources/<project tree>  (filtered copy)
//! ```

mod template;

use crate::bundler::platform::{BundleTarget, ENTRY_RESOURCE, Platform, render};
use crate::bundler::replace::{Confirm, replace_if_exists};
use crate::bundler::settings::Settings;
use crate::bundler::utils::fs;
use crate::bundler::{TreeFilter, copy};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Bundle project as a macOS `.app` directory.
///
/// Linear procedure: resolve paths, replace any existing bundle after
/// confirmation, create the skeleton and placeholder files, copy the
/// filtered project tree into `Contents/Resources`, write the launcher and
/// runtime binary, then render `Info.plist`.
///
/// Returns the bundle path, or `None` when the user declined to replace an
/// existing bundle (clean abort, nothing touched).
pub async fn bundle_project(
    settings: &Settings,
    confirm: &dyn Confirm,
) -> Result<Option<PathBuf>> {
    let target = BundleTarget::new(Platform::MacOs, settings.output_dir(), settings.product_name());
    let app_path = &target.bundle_path;
    let entry_script_name = settings.entry_script_name();

    log::info!("assembling macOS bundle at {}", app_path.display());

    if !replace_if_exists(app_path, confirm).await? {
        log::info!("keeping existing bundle, aborting");
        return Ok(None);
    }

    // Skeleton
    let contents = app_path.join("Contents");
    let resources = contents.join("Resources");
    let macos_dir = contents.join("MacOS");
    fs::create_dir_all(&contents).await?;
    fs::create_dir_all(&resources).await?;
    fs::create_dir_all(&macos_dir).await?;

    // Placeholders, filled in below
    let plist_path = contents.join("Info.plist");
    let pkg_info_path = contents.join("PkgInfo");
    let launcher_path = macos_dir.join(&entry_script_name);
    fs::write_text(&plist_path, "").await?;
    fs::write_text(&pkg_info_path, "").await?;
    fs::write_text(&launcher_path, "").await?;

    // Resources
    let filter = TreeFilter::new(settings.project_root(), settings.output_dir());
    copy::copy_tree(settings.project_root(), &resources, &filter).await?;

    // Launcher + runtime
    let runtime_name = Platform::MacOs.runtime_name();
    fs::write_text(&launcher_path, &render_launcher(runtime_name)?).await?;
    fs::set_executable(&launcher_path).await?;

    let runtime_dest = macos_dir.join(runtime_name);
    fs::copy_file(settings.runtime_binary(), &runtime_dest).await?;
    fs::set_executable(&runtime_dest).await?;

    // Manifest
    fs::write_text(&plist_path, &render_info_plist(settings, &entry_script_name)?).await?;
    fs::write_text(&pkg_info_path, template::PKG_INFO).await?;

    log::info!("created macOS bundle {}", app_path.display());
    Ok(Some(target.bundle_path))
}

fn render_info_plist(settings: &Settings, executable: &str) -> Result<String> {
    let mut data = BTreeMap::new();
    data.insert("executable", executable.to_string());
    data.insert("product_name", settings.product_name().to_string());
    data.insert("version", settings.version_string().to_string());
    render("Info.plist", template::INFO_PLIST_TEMPLATE, &data)
}

fn render_launcher(runtime_name: &str) -> Result<String> {
    let mut data = BTreeMap::new();
    data.insert("runtime", runtime_name.to_string());
    data.insert("entry", ENTRY_RESOURCE.to_string());
    render("launcher", template::LAUNCHER_TEMPLATE, &data)
}
