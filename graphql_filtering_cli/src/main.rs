// SPDX-License-Identifier: AGPL-3.0-or-later

mod config;
mod document;
mod utils;

use std::fs;

use anyhow::{Context, Result};
use log::info;

use crate::config::load_config;
use crate::document::render_document;
use crate::utils::{absolute_path, log_filter};

fn main() -> Result<()> {
    // Load configuration from config file, environment variables and command line arguments
    let (config_file_path, config) = load_config()?;

    env_logger::Builder::new()
        .parse_filters(&log_filter(&config.log_level))
        .init();

    match &config_file_path {
        Some(path) => info!("Loading config file from {}", absolute_path(path).display()),
        None => info!("No config file provided"),
    }

    let document = render_document(&config)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Could not write SDL to '{}'", path.display()))?;
            info!("Wrote SDL document to {}", absolute_path(path).display());
        }
        None => print!("{}", document),
    }

    Ok(())
}
