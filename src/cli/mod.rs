//! Command line interface for the visu bundler.
//!
//! Wires arguments, the project manifest, the interactive overwrite prompt
//! and terminal output to the bundle assembly engine in [`crate::bundler`].

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::replace::Confirm;
use crate::bundler::settings::{ProjectIdentity, SettingsBuilder};
use crate::bundler::{Platform, paths, platform};
use crate::config::{ConfigStore, ManifestStore};
use crate::error::{BundlerError, ErrorExt, Result};
use std::path::{Path, PathBuf};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs one bundling command from parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    let out = OutputManager::new();

    let project_root = match &args.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir()
            .fs_context("resolving current directory", Path::new("."))?,
    };

    let store = ManifestStore::load(&project_root).await?;
    let identity = ProjectIdentity::resolve(
        args.project_name.as_deref(),
        args.project_version.as_deref(),
        &store,
    )?;

    let output_dir = paths::resolve_output_directory(&project_root, args.output.as_deref()).await?;

    let target_platform = match &args.os {
        Some(value) => Platform::from_value(value)?,
        None => Platform::detect()?,
    };

    let runtime_binary = resolve_runtime(args, &store, &project_root, target_platform)?;

    let settings = SettingsBuilder::new()
        .project_root(&project_root)
        .output_dir(&output_dir)
        .identity(identity)
        .runtime_binary(runtime_binary)
        .build()?;

    let confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(TerminalConfirm)
    };

    match platform::assemble(target_platform, &settings, confirm.as_ref()).await? {
        Some(bundle_path) => {
            out.success(&format!("created bundle at {}", bundle_path.display()));
            Ok(0)
        }
        None => {
            out.warn("existing bundle left untouched");
            Ok(0)
        }
    }
}

/// Resolves where the runtime binary is copied from.
///
/// Precedence: `--runtime` flag, then the `project.bundler.runtime` manifest
/// key (relative to the project root), then a `visu` binary installed next
/// to this tool.
fn resolve_runtime(
    args: &Args,
    store: &dyn ConfigStore,
    project_root: &Path,
    platform: Platform,
) -> Result<PathBuf> {
    if let Some(runtime) = &args.runtime {
        return Ok(runtime.clone());
    }

    if let Some(configured) = store.get("project.bundler.runtime") {
        let configured = PathBuf::from(configured);
        return Ok(if configured.is_absolute() {
            configured
        } else {
            project_root.join(configured)
        });
    }

    let current = std::env::current_exe()
        .fs_context("locating this executable", Path::new("visu-bundle"))?;
    let dir = current.parent().ok_or_else(|| {
        BundlerError::Configuration("cannot locate the directory of this executable".into())
    })?;
    Ok(dir.join(platform.runtime_name()))
}

/// Terminal-backed confirmation prompt.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn ask(&self, question: &str) -> bool {
        inquire::Confirm::new(question)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }
}

/// Prompt stand-in for `--yes` runs.
struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn ask(&self, _question: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestStore;

    fn base_args() -> Args {
        Args {
            project_root: None,
            output: None,
            os: None,
            project_name: None,
            project_version: None,
            runtime: None,
            yes: true,
        }
    }

    #[test]
    fn explicit_runtime_flag_wins() {
        let mut args = base_args();
        args.runtime = Some(PathBuf::from("/custom/visu"));
        let store = ManifestStore::default();
        let runtime =
            resolve_runtime(&args, &store, Path::new("/proj"), Platform::MacOs).expect("resolve");
        assert_eq!(runtime, PathBuf::from("/custom/visu"));
    }

    #[test]
    fn configured_runtime_is_project_relative() {
        let args = base_args();
        let store = ManifestStore::from_table(
            "[project.bundler]\nruntime = \"bin/visu\"\n".parse().expect("toml"),
        );
        let runtime =
            resolve_runtime(&args, &store, Path::new("/proj"), Platform::MacOs).expect("resolve");
        assert_eq!(runtime, PathBuf::from("/proj/bin/visu"));
    }
}
