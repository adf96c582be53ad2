// file: src/config/loader.rs
// version: 1.0.0
// guid: 8e51c3b9-0d74-4a26-b5f8-c917e24a60d3

//! Settings file loading
//!
//! The settings file is an optional YAML document overriding the advanced
//! knobs (branch, Node version, bench directory, my.cnf path). Missing keys
//! fall back to the stock defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{
    DEFAULT_BENCH_DIR, DEFAULT_FRAPPE_BRANCH, DEFAULT_MYSQL_CONFIG, DEFAULT_NODE_VERSION,
};
use crate::{InstallError, Result};

/// Advanced settings, all optional in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_frappe_branch")]
    pub frappe_branch: String,

    #[serde(default = "default_node_version")]
    pub node_version: String,

    #[serde(default = "default_bench_dir")]
    pub bench_dir: String,

    #[serde(default = "default_mysql_config_path")]
    pub mysql_config_path: String,
}

fn default_frappe_branch() -> String {
    DEFAULT_FRAPPE_BRANCH.to_string()
}

fn default_node_version() -> String {
    DEFAULT_NODE_VERSION.to_string()
}

fn default_bench_dir() -> String {
    DEFAULT_BENCH_DIR.to_string()
}

fn default_mysql_config_path() -> String {
    DEFAULT_MYSQL_CONFIG.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frappe_branch: default_frappe_branch(),
            node_version: default_node_version(),
            bench_dir: default_bench_dir(),
            mysql_config_path: default_mysql_config_path(),
        }
    }
}

/// Settings file loader
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load settings from a YAML file, expanding `~` in path-valued keys
    pub fn load_settings<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let content = fs::read_to_string(&path).map_err(|e| {
            InstallError::config(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut settings: Settings = serde_yaml::from_str(&content)?;
        settings.bench_dir = shellexpand::tilde(&settings.bench_dir).into_owned();
        settings.mysql_config_path = shellexpand::tilde(&settings.mysql_config_path).into_owned();
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
