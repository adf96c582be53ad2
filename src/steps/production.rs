// file: src/steps/production.rs
// version: 1.0.0
// guid: 08d4a1f7-59cb-4262-8e30-b7f6d25c81a4

//! Production serving setup (supervisor + nginx)
//!
//! `bench setup production` writes the supervisor and nginx configs itself;
//! this step only sequences it, regenerates the nginx config, and reloads
//! the proxy. No verification beyond exit status.

use crate::config::InstallConfig;
use crate::plan::PlanStep;

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Set up production services")
        .command(format!(
            "cd {} && sudo bench setup production frappe",
            config.bench_dir
        ))
        .command(format!("cd {} && sudo bench setup nginx", config.bench_dir))
        .elevated("service nginx reload")
}
