// file: src/steps/apps.rs
// version: 1.0.0
// guid: f17b50ad-284c-4e93-b6d5-03a9c8e26f71

//! ERPNext application fetch and install

use crate::config::InstallConfig;
use crate::plan::PlanStep;

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Install ERPNext")
        .command(format!(
            "cd {} && bench get-app --branch {} erpnext",
            config.bench_dir, config.frappe_branch
        ))
        .command(format!(
            "cd {} && bench --site {} install-app erpnext",
            config.bench_dir, config.site_name
        ))
}
