// file: src/steps/scheduler.rs
// version: 1.0.0
// guid: 6f92e3b5-0a18-4c74-bd29-571e08d4a3c6

//! Scheduler enablement and maintenance-mode clear

use crate::config::InstallConfig;
use crate::plan::PlanStep;

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Enable scheduler")
        .command(format!(
            "cd {} && bench --site {} enable-scheduler",
            config.bench_dir, config.site_name
        ))
        .command(format!(
            "cd {} && bench --site {} set-maintenance-mode off",
            config.bench_dir, config.site_name
        ))
}
