// file: src/config/mod.rs
// version: 1.0.0
// guid: d2a97f41-8e63-4b05-9cd8-52f1e0a3946c

//! Configuration for an ERPNext provisioning run
//!
//! The two user-supplied values (site name, MariaDB root password) come from
//! the command line; everything else has defaults matching the stock Frappe
//! version-15 install and can be overridden via an optional settings file.

pub mod loader;

pub use loader::{ConfigLoader, Settings};

use crate::{InstallError, Result};

/// Domain literal the upstream runbook shipped with. A run that reaches the
/// TLS step with this value still proceeds (certbot will fail on its own if
/// DNS does not resolve), but the agent warns loudly.
pub const PLACEHOLDER_DOMAIN: &str = "subdomain.yourdomain.com";

/// Default Frappe/ERPNext release branch
pub const DEFAULT_FRAPPE_BRANCH: &str = "version-15";

/// Default Node major version installed through nvm
pub const DEFAULT_NODE_VERSION: &str = "18";

/// Default bench workspace directory, relative to the invoking user's cwd
pub const DEFAULT_BENCH_DIR: &str = "frappe-bench";

/// Default MariaDB main config file
pub const DEFAULT_MYSQL_CONFIG: &str = "/etc/mysql/my.cnf";

/// Fully resolved configuration for one provisioning run
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Site name for `bench new-site` and every site-scoped command
    pub site_name: String,
    /// MariaDB root password fed to mysql_secure_installation
    pub mysql_root_password: String,
    /// Domain registered against the site and requested from certbot
    pub domain: String,
    /// Skip the TLS chain entirely
    pub skip_tls: bool,
    /// Frappe/ERPNext branch for `bench init` and `bench get-app`
    pub frappe_branch: String,
    /// Node major version passed to `nvm install`
    pub node_version: String,
    /// Bench workspace directory
    pub bench_dir: String,
    /// MariaDB config file the charset blocks are appended to
    pub mysql_config_path: String,
}

impl InstallConfig {
    /// Build a config from the two required CLI values plus defaults
    pub fn new(site_name: impl Into<String>, mysql_root_password: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            mysql_root_password: mysql_root_password.into(),
            domain: PLACEHOLDER_DOMAIN.to_string(),
            skip_tls: false,
            frappe_branch: DEFAULT_FRAPPE_BRANCH.to_string(),
            node_version: DEFAULT_NODE_VERSION.to_string(),
            bench_dir: DEFAULT_BENCH_DIR.to_string(),
            mysql_config_path: DEFAULT_MYSQL_CONFIG.to_string(),
        }
    }

    /// Overlay advanced settings from a settings file
    pub fn apply_settings(&mut self, settings: Settings) {
        self.frappe_branch = settings.frappe_branch;
        self.node_version = settings.node_version;
        self.bench_dir = settings.bench_dir;
        self.mysql_config_path = settings.mysql_config_path;
    }

    /// Whether the TLS domain was never changed from the shipped literal
    pub fn domain_is_placeholder(&self) -> bool {
        self.domain == PLACEHOLDER_DOMAIN
    }

    /// Validate user-supplied values before any host mutation
    pub fn validate(&self) -> Result<()> {
        if self.site_name.is_empty() {
            return Err(InstallError::validation("site name must not be empty"));
        }
        if self.site_name.chars().any(char::is_whitespace) {
            return Err(InstallError::validation(format!(
                "site name `{}` must not contain whitespace",
                self.site_name
            )));
        }
        if self.mysql_root_password.is_empty() {
            return Err(InstallError::validation(
                "MariaDB root password must not be empty",
            ));
        }
        if self.mysql_root_password.contains('\n') {
            // An embedded newline would desynchronize the scripted answers
            // fed to mysql_secure_installation.
            return Err(InstallError::validation(
                "MariaDB root password must not contain a newline",
            ));
        }
        if self.domain.is_empty() || self.domain.chars().any(char::is_whitespace) {
            return Err(InstallError::validation(format!(
                "domain `{}` must be a single non-empty hostname",
                self.domain
            )));
        }
        if self.bench_dir.is_empty() {
            return Err(InstallError::validation("bench directory must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_install() {
        let config = InstallConfig::new("mysite.local", "rootpass123");
        assert_eq!(config.frappe_branch, "version-15");
        assert_eq!(config.node_version, "18");
        assert_eq!(config.bench_dir, "frappe-bench");
        assert_eq!(config.mysql_config_path, "/etc/mysql/my.cnf");
        assert!(config.domain_is_placeholder());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_site_name_whitespace_rejected() {
        let config = InstallConfig::new("my site", "rootpass123");
        assert!(config.validate().is_err());

        let config = InstallConfig::new("", "rootpass123");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_password_newline_rejected() {
        let config = InstallConfig::new("mysite.local", "bad\npass");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_domain_accepted() {
        let mut config = InstallConfig::new("mysite.local", "rootpass123");
        config.domain = "erp.example.com".to_string();
        assert!(!config.domain_is_placeholder());
        assert!(config.validate().is_ok());

        config.domain = "two words".to_string();
        assert!(config.validate().is_err());
    }
}
