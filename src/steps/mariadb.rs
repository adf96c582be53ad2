// file: src/steps/mariadb.rs
// version: 1.0.0
// guid: 52e9b7a1-3c60-4df4-a82b-90d14f7e3c58

//! MariaDB hardening and charset configuration

use crate::config::InstallConfig;
use crate::plan::PlanStep;

/// Scripted answers piped into `mysql_secure_installation` after the root
/// password line. Order matches the prompt sequence of MariaDB 10.6 as
/// shipped on Ubuntu 22.04 (remove anonymous users, disallow remote root is
/// answered N, remove test database, reload privilege tables); a different
/// tool version with a different prompt order will desynchronize silently.
pub const SECURE_INSTALLATION_ANSWERS: [&str; 5] = ["Y", "Y", "N", "Y", "Y"];

/// `[mysqld]` charset block appended to my.cnf. Byte-stable across runs;
/// re-running duplicates it, which MariaDB tolerates (last value wins).
pub const MYSQLD_CHARSET_BLOCK: &str = "\n[mysqld]\ncharacter-set-client-handshake = FALSE\ncharacter-set-server = utf8mb4\ncollation-server = utf8mb4_unicode_ci\n";

/// `[mysql]` client default charset block appended to my.cnf
pub const MYSQL_CHARSET_BLOCK: &str = "\n[mysql]\ndefault-character-set = utf8mb4\n";

/// The full hardening command: heredoc with the password as the first input
/// line, then the fixed answers.
pub fn hardening_command(mysql_root_password: &str) -> String {
    format!(
        "mysql_secure_installation <<EOF\n{}\n{}\nEOF",
        mysql_root_password,
        SECURE_INSTALLATION_ANSWERS.join("\n")
    )
}

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Configure MariaDB")
        .elevated(hardening_command(&config.mysql_root_password))
        .append_file(&config.mysql_config_path, MYSQLD_CHARSET_BLOCK)
        .append_file(&config.mysql_config_path, MYSQL_CHARSET_BLOCK)
        .elevated("service mysql restart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Action;
    use std::path::PathBuf;

    #[test]
    fn test_hardening_input_sequence() {
        let command = hardening_command("rootpass123");
        let body = command
            .strip_prefix("mysql_secure_installation <<EOF\n")
            .unwrap()
            .strip_suffix("\nEOF")
            .unwrap();

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "rootpass123");
        assert_eq!(lines[1..].to_vec(), vec!["Y", "Y", "N", "Y", "Y"]);
        assert_eq!(lines.len(), 1 + SECURE_INSTALLATION_ANSWERS.len());
    }

    #[test]
    fn test_charset_blocks_are_byte_stable() {
        let config = InstallConfig::new("mysite.local", "rootpass123");
        let first = plan(&config);
        let second = plan(&config);

        let blocks = |step: &PlanStep| -> Vec<String> {
            step.actions
                .iter()
                .filter_map(|a| match a {
                    Action::AppendFile { content, .. } => Some(content.clone()),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(blocks(&first), blocks(&second));
        assert_eq!(
            blocks(&first),
            vec![
                MYSQLD_CHARSET_BLOCK.to_string(),
                MYSQL_CHARSET_BLOCK.to_string()
            ]
        );
    }

    #[test]
    fn test_appends_target_configured_path() {
        let mut config = InstallConfig::new("mysite.local", "rootpass123");
        config.mysql_config_path = "/etc/mysql/mariadb.cnf".to_string();
        let step = plan(&config);

        for action in &step.actions {
            if let Action::AppendFile { path, .. } = action {
                assert_eq!(path, &PathBuf::from("/etc/mysql/mariadb.cnf"));
            }
        }
    }

    #[test]
    fn test_restart_follows_appends() {
        let config = InstallConfig::new("mysite.local", "rootpass123");
        let step = plan(&config);
        assert_eq!(step.actions.len(), 4);
        assert!(matches!(
            &step.actions[3],
            Action::Command(spec) if spec.rendered() == "sudo service mysql restart"
        ));
    }
}
