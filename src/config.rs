//! Per-template scaffold configuration.
//! A template may ship a `scaffold.json`, `scaffold.yml` or `scaffold.yaml`
//! selecting which questions are asked and which files are templated.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Scaffold options for one template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Ask whether to initialise a git repository
    pub include_git_init: bool,
    /// Ask for the GitHub user or organisation owning the project
    pub include_contributors: bool,
    /// Template of the build output directory, rendered with
    /// `packageName` and `componentName`
    pub publish_dir_template: String,
    /// Files, relative to the project root, rendered against the field mapping
    pub templated_files: Vec<PathBuf>,
    /// Token in README.md replaced with the package name
    pub readme_placeholder: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            include_git_init: true,
            include_contributors: true,
            publish_dir_template: "dist".to_string(),
            templated_files: vec![
                PathBuf::from(".fatherrc.ts"),
                PathBuf::from("src").join("index.tsx"),
                PathBuf::from("examples").join("src").join("App.tsx"),
            ],
            readme_placeholder: "{{project-name}}".to_string(),
        }
    }
}

/// Loads the scaffold configuration of `template_dir`, trying each of
/// [`CONFIG_FILES`] in turn.
///
/// # Returns
/// * The defaults if the template has no configuration file
///
/// # Errors
/// * `Error::ConfigError` if the configuration file does not parse
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<ScaffoldConfig> {
    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| Error::file("read", &config_path, e))?;
            return parse_config(&content);
        }
    }

    debug!("No scaffold configuration found, using defaults");
    Ok(ScaffoldConfig::default())
}

/// Parses configuration content, JSON first and YAML as fallback.
pub fn parse_config(content: &str) -> Result<ScaffoldConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}
