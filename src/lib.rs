//! Portable application bundler for visu projects.
//!
//! This library assembles a self-contained, platform-native bundle from a
//! project's source tree:
//! - macOS `.app` directories with launcher, `Info.plist` and resources
//! - Windows application folders with a batch launcher and app manifest
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, ErrorExt, Result};
