//! Shared utilities for bundling.

pub mod fs;
