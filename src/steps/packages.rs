// file: src/steps/packages.rs
// version: 1.0.0
// guid: 7a2c94e5-d018-4b6f-83a7-c5f1d20e9b46

//! OS package installation

use crate::config::InstallConfig;
use crate::plan::PlanStep;

/// Packages required by Frappe/ERPNext on Debian/Ubuntu, installed one at a
/// time so a failure pinpoints the offending package. Order is kept for
/// readability only.
pub const REQUIRED_PACKAGES: [&str; 17] = [
    "git",
    "python3-dev",
    "python3.10-dev",
    "python3-setuptools",
    "python3-pip",
    "python3-distutils",
    "python3.10-venv",
    "software-properties-common",
    "mariadb-server",
    "mariadb-client",
    "redis-server",
    "xvfb",
    "libfontconfig",
    "wkhtmltopdf",
    "libmysqlclient-dev",
    "curl",
    "npm",
];

pub fn plan(_config: &InstallConfig) -> PlanStep {
    REQUIRED_PACKAGES
        .iter()
        .fold(PlanStep::new("Install OS packages"), |step, package| {
            step.elevated(format!("apt-get install -y {package}"))
        })
}
