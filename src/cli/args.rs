//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Portable application bundler for visu projects
#[derive(Parser, Debug)]
#[command(
    name = "visu-bundle",
    version,
    about = "Portable application bundler for visu projects",
    long_about = "Assembles a self-contained, platform-native bundle from a project's source tree.

On macOS this is a .app directory with a launcher script, Info.plist and a
filtered copy of the project under Contents/Resources; on Windows an
application folder with a batch launcher and app manifest.

Usage:
  visu-bundle
  visu-bundle --output build/out --os macos
  visu-bundle --project-name \"Play Demo\" --project-version 1.2.0 --yes

Build artifacts (the output directory), hidden files and nested vendor
trees are excluded from the copied resources."
)]
pub struct Args {
    /// Project root to bundle (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Output directory (defaults to <project root>/dist)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Target platform: macos (darwin) or windows (win32); detected from
    /// the host when omitted
    #[arg(long, value_name = "PLATFORM")]
    pub os: Option<String>,

    /// Application name (falls back to project.toml)
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Application version (falls back to project.toml)
    #[arg(long, value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Runtime binary to place in the bundle (falls back to
    /// project.bundler.runtime, then to a visu binary next to this tool)
    #[arg(long, value_name = "PATH")]
    pub runtime: Option<PathBuf>,

    /// Replace an existing bundle without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
