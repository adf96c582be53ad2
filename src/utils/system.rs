// file: src/utils/system.rs
// version: 1.0.0
// guid: 2e81f4a9-c357-4d02-b816-f09d3c6a75e2

//! System preflight checks

use crate::{InstallError, Result};
use tracing::warn;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    /// Verify the tools every run depends on before mutating anything.
    /// Missing snap only produces a warning since the TLS step can be
    /// skipped; a missing package manager is fatal up front.
    pub fn check_prerequisites() -> Result<()> {
        let required = ["bash", "apt-get", "curl", "service"];

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|cmd| !Self::command_exists(cmd))
            .collect();

        if !missing.is_empty() {
            return Err(InstallError::system(format!(
                "required tools missing from PATH: {}",
                missing.join(", ")
            )));
        }

        if !Self::is_root() && !Self::command_exists("sudo") {
            return Err(InstallError::system(
                "not running as root and sudo is not available",
            ));
        }

        if !Self::command_exists("snap") {
            warn!("snap not found - the TLS step will fail unless snapd is installed");
        }

        Ok(())
    }
}
