//! visu-bundle - portable application bundler for visu projects.
//!
//! This binary assembles a platform-native bundle (macOS .app directory or
//! Windows application folder) from a project's source tree.

mod bundler;
mod cli;
mod config;
mod error;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
