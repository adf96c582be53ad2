// file: src/cli/args.rs
// version: 1.0.0
// guid: 40d8b2f6-97c1-4e35-a6d0-58e3c14f09b7

//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed on argument-count errors (stdout, exit status 1)
pub const USAGE: &str =
    "Usage: erpnext-install-agent <site-name> <mysql-root-password> [options]";

#[derive(Parser, Debug)]
#[command(name = "erpnext-install-agent")]
#[command(about = "Automated ERPNext/Frappe bench provisioning for Debian/Ubuntu hosts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Site name for the new bench site
    pub site_name: String,

    /// MariaDB root password
    pub mysql_root_password: String,

    /// Domain registered against the site and requested from certbot
    #[arg(long)]
    pub domain: Option<String>,

    /// Optional YAML settings file overriding branch, Node version,
    /// bench directory and my.cnf path
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Print the provisioning plan without executing anything
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the plan as JSON instead of text
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Skip the TLS/certbot chain
    #[arg(long)]
    pub skip_tls: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_two_positionals_parse() {
        let cli = Cli::try_parse_from(["erpnext-install-agent", "mysite.local", "rootpass123"])
            .unwrap();
        assert_eq!(cli.site_name, "mysite.local");
        assert_eq!(cli.mysql_root_password, "rootpass123");
        assert!(cli.domain.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.skip_tls);
    }

    #[test]
    fn test_missing_or_extra_positionals_fail() {
        assert!(Cli::try_parse_from(["erpnext-install-agent"]).is_err());
        assert!(Cli::try_parse_from(["erpnext-install-agent", "mysite.local"]).is_err());
        assert!(Cli::try_parse_from([
            "erpnext-install-agent",
            "mysite.local",
            "rootpass123",
            "extra"
        ])
        .is_err());
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["erpnext-install-agent", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_json_requires_dry_run() {
        assert!(Cli::try_parse_from([
            "erpnext-install-agent",
            "mysite.local",
            "rootpass123",
            "--json"
        ])
        .is_err());
        assert!(Cli::try_parse_from([
            "erpnext-install-agent",
            "mysite.local",
            "rootpass123",
            "--dry-run",
            "--json"
        ])
        .is_ok());
    }
}
