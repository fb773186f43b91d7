// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use graphql_filtering::{SupportedFieldTypes, TemplateInput, TemplateKind, TemplateOptions};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "graphql-filtering.toml";

const ENV_PREFIX: &str = "GRAPHQL_FILTERING_";

pub type ConfigFilePath = Option<PathBuf>;

/// Settings and type definitions used to render the SDL document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Input types which get rendered for every type definition.
    pub templates: Vec<TemplateKind>,

    /// Field types which get a filter in where input types.
    pub supported_field_types: SupportedFieldTypes,

    /// Keep empty lines for unsupported fields in where input types.
    pub legacy_blank_lines: bool,

    /// Emit placeholder fields in ordering input types.
    pub order_by_placeholders: bool,

    /// Prepend scalar selector and `OrderBy` definitions to the document.
    pub shared_types: bool,

    /// Write the document to this file instead of stdout.
    pub output: Option<PathBuf>,

    /// Log filter passed to the logger.
    pub log_level: String,

    /// Types to render input types for.
    pub types: Vec<TemplateInput>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            templates: TemplateKind::ALL.to_vec(),
            supported_field_types: SupportedFieldTypes::default(),
            legacy_blank_lines: false,
            order_by_placeholders: true,
            shared_types: false,
            output: None,
            log_level: "warn".into(),
            types: Vec::new(),
        }
    }
}

impl ConfigFile {
    /// Template options derived from this configuration.
    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            supported_field_types: self.supported_field_types.clone(),
            legacy_blank_lines: self.legacy_blank_lines,
            order_by_placeholders: self.order_by_placeholders,
        }
    }
}

/// Get configuration from 1. .toml file, 2. environment variables and 3. command line arguments
/// (in that order, meaning that later configuration sources take precedence over the earlier
/// ones).
pub fn load_config() -> Result<(ConfigFilePath, ConfigFile)> {
    load_config_from(Cli::parse())
}

/// Merge all configuration sources on top of the already parsed command line arguments.
pub fn load_config_from(cli: Cli) -> Result<(ConfigFilePath, ConfigFile)> {
    // Determine if a config file path was provided or if we should look for it in common locations
    let config_file_path: ConfigFilePath = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }

            Some(path.clone())
        }
        None => try_determine_config_file_path(),
    };

    let mut figment = Figment::from(Serialized::defaults(ConfigFile::default()));
    if let Some(path) = &config_file_path {
        figment = figment.merge(Toml::file(path));
    }

    let config = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(cli))
        .extract()?;

    Ok((config_file_path, config))
}

/// Configuration derived from command line arguments.
///
/// All arguments are optional and don't get serialized to Figment when they're None. This is to
/// assure that default values do not overwrite settings from the config file or environment.
#[derive(Parser, Serialize, Debug)]
#[command(
    name = "graphql-filtering",
    about = "Render GraphQL selector, filter and ordering input types",
    long_about = None,
    version
)]
pub struct Cli {
    /// Path to an optional "graphql-filtering.toml" file holding type definitions and settings.
    ///
    /// When not set the program will try to find a `graphql-filtering.toml` file in the folder
    /// the program is executed in and otherwise in the regarding operation systems XDG config
    /// directory ("$HOME/.config/graphql-filtering/graphql-filtering.toml" on Linux).
    #[arg(short = 'c', long, value_name = "PATH")]
    #[serde(skip_serializing)]
    config: Option<PathBuf>,

    /// Input types to render for every type: selector, selector_unique, where and order_by.
    /// Separate multiple values with a whitespace. Defaults to all of them.
    #[arg(short = 't', long, value_name = "TEMPLATE", num_args = 1..)]
    #[serde(skip_serializing_if = "Option::is_none")]
    templates: Option<Vec<String>>,

    /// Field types which get a filter in where input types. Defaults to String, Int and Date.
    #[arg(short = 's', long, value_name = "TYPE", num_args = 1..)]
    #[serde(skip_serializing_if = "Option::is_none")]
    supported_field_types: Option<Vec<String>>,

    /// Keep an empty line for every field with an unsupported type in where input types.
    /// Disabled by default.
    #[arg(
        long,
        value_name = "BOOL",
        default_missing_value = "true",
        num_args = 0..=1,
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy_blank_lines: Option<bool>,

    /// Emit `foo` and `bar` placeholder fields in ordering input types. Enabled by default.
    #[arg(
        long,
        value_name = "BOOL",
        default_missing_value = "true",
        num_args = 0..=1,
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    order_by_placeholders: Option<bool>,

    /// Prepend the scalar selector input types and the `OrderBy` enum to the document.
    /// Disabled by default.
    #[arg(
        long,
        value_name = "BOOL",
        default_missing_value = "true",
        num_args = 0..=1,
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    shared_types: Option<bool>,

    /// Write the rendered document to this file. Defaults to stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<PathBuf>,

    /// Set log verbosity. Possible log levels are: ERROR, WARN, INFO, DEBUG, TRACE. They are
    /// scoped to "graphql_filtering" unless a filter value like "=TRACE" is given.
    #[arg(short = 'l', long, value_name = "LEVEL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

fn try_determine_config_file_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Find config file in current folder
    if let Ok(mut current_dir) = std::env::current_dir() {
        current_dir.push(CONFIG_FILE_NAME);
        candidates.push(current_dir);
    }

    // Find config file in XDG config folder
    if let Some(project_dirs) = ProjectDirs::from("", "", "graphql-filtering") {
        let mut xdg_config_dir = project_dirs.config_dir().to_path_buf();
        xdg_config_dir.push(CONFIG_FILE_NAME);
        candidates.push(xdg_config_dir);
    }

    candidates.into_iter().find(|path| path.exists())
}
