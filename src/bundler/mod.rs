//! Bundle assembly engine.
//!
//! This module contains the core bundling pipeline:
//! 1. [`settings`] - resolved project identity and run configuration
//! 2. [`paths`] - output directory resolution
//! 3. [`replace`] - confirm-guarded replacement of an existing bundle
//! 4. [`filter`] / [`copy`] - filtered copy of the project tree
//! 5. [`platform`] - platform-specific skeleton, launcher and manifest
//!
//! The CLI in [`crate::cli`] wires arguments, prompting and output to these
//! pieces; nothing in here talks to a terminal directly.

pub mod copy;
pub mod filter;
pub mod paths;
pub mod platform;
pub mod replace;
pub mod settings;
pub mod utils;

pub use filter::TreeFilter;
pub use platform::{BundleTarget, Platform};
pub use replace::Confirm;
pub use settings::{ProjectIdentity, Settings, SettingsBuilder};
