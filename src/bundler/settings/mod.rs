//! Configuration structures for one bundling run.

mod builder;
mod core;
mod identity;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use identity::{ProjectIdentity, resolve_field};
