// file: src/steps/node.rs
// version: 1.0.0
// guid: ae04d6c8-91f5-4e3b-b720-68c3a5d90f12

//! Node runtime installation via nvm

use crate::config::InstallConfig;
use crate::plan::PlanStep;

/// Upstream nvm install script. Piped straight to bash, unverified, exactly
/// as the stock Frappe install instructions do.
pub const NVM_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/creationix/nvm/master/install.sh";

/// Prefix sourcing nvm into the subshell. Profile edits made by the install
/// script never reach this process, so every nvm-dependent command carries
/// its environment explicitly instead.
const NVM_ENV_PREFIX: &str =
    r#"export NVM_DIR="$HOME/.nvm" && [ -s "$NVM_DIR/nvm.sh" ] && . "$NVM_DIR/nvm.sh""#;

/// Wrap a command so it runs with nvm loaded
pub fn with_nvm(command: &str) -> String {
    format!("{NVM_ENV_PREFIX} && {command}")
}

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Install Node toolchain")
        .command(format!("curl {NVM_INSTALL_URL} | bash"))
        .command(with_nvm(&format!("nvm install {}", config.node_version)))
        .command(with_nvm("npm install -g yarn"))
}
