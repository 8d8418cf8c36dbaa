//! Windows application folder assembly.
//!
//! Windows has no `.app` convention; the bundle is a plain folder:
//!
//! ```text
//! <Name>/
//!   <entry script>.bat        (launcher)
//!   visu.exe                  (runtime binary)
//!   app.manifest              (win32 assembly manifest)
//!   resources/<project tree>  (filtered copy)
//! ```

mod template;

use crate::bundler::platform::{
    BundleTarget, ENTRY_RESOURCE, Platform, format_version_quad, render,
};
use crate::bundler::replace::{Confirm, replace_if_exists};
use crate::bundler::settings::Settings;
use crate::bundler::utils::fs;
use crate::bundler::{TreeFilter, copy};
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Bundle project as a Windows application folder.
///
/// Same contract as the macOS variant: returns the bundle path, or `None`
/// when the user declined to replace an existing bundle.
pub async fn bundle_project(
    settings: &Settings,
    confirm: &dyn Confirm,
) -> Result<Option<PathBuf>> {
    let target = BundleTarget::new(
        Platform::Windows,
        settings.output_dir(),
        settings.product_name(),
    );
    let bundle_path = &target.bundle_path;

    log::info!("assembling Windows bundle at {}", bundle_path.display());

    if !replace_if_exists(bundle_path, confirm).await? {
        log::info!("keeping existing bundle, aborting");
        return Ok(None);
    }

    // Skeleton
    let resources = bundle_path.join("resources");
    fs::create_dir_all(bundle_path).await?;
    fs::create_dir_all(&resources).await?;

    // Resources
    let filter = TreeFilter::new(settings.project_root(), settings.output_dir());
    copy::copy_tree(settings.project_root(), &resources, &filter).await?;

    // Launcher + runtime
    let runtime_name = Platform::Windows.runtime_name();
    let launcher_path = bundle_path.join(format!("{}.bat", settings.entry_script_name()));
    fs::write_text(&launcher_path, &render_launcher(runtime_name)?).await?;
    fs::copy_file(settings.runtime_binary(), &bundle_path.join(runtime_name)).await?;

    // Manifest
    let manifest_path = bundle_path.join("app.manifest");
    fs::write_text(&manifest_path, &render_app_manifest(settings)?).await?;

    log::info!("created Windows bundle {}", bundle_path.display());
    Ok(Some(target.bundle_path))
}

fn render_app_manifest(settings: &Settings) -> Result<String> {
    let mut data = BTreeMap::new();
    data.insert("product_name", settings.product_name().to_string());
    data.insert(
        "version_quad",
        format_version_quad(settings.version_string()),
    );
    render("app.manifest", template::APP_MANIFEST_TEMPLATE, &data)
}

fn render_launcher(runtime_name: &str) -> Result<String> {
    let mut data = BTreeMap::new();
    data.insert("runtime", runtime_name.to_string());
    data.insert("entry", format!("resources\\{ENTRY_RESOURCE}"));
    render("launcher.bat", template::LAUNCHER_TEMPLATE, &data)
}
