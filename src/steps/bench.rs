// file: src/steps/bench.rs
// version: 1.0.0
// guid: c3b07f29-6d84-4a51-9e06-2f78b1d04ca9

//! frappe-bench CLI installation and workspace/site initialization

use crate::config::InstallConfig;
use crate::plan::PlanStep;

/// Install the bench CLI through pip. Deliberately unpinned: the stock
/// install always takes the latest release, so behavior can drift between
/// runs at different times.
pub fn cli_plan() -> PlanStep {
    PlanStep::new("Install frappe-bench CLI").elevated("pip3 install frappe-bench")
}

/// Initialize the bench workspace pinned to the configured branch, then
/// create the site inside it. `bench init` refuses an existing directory;
/// re-running against a prior half-finished workspace fails there.
pub fn workspace_plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Initialize bench workspace and site")
        .command(format!(
            "bench init --frappe-branch {} {}",
            config.frappe_branch, config.bench_dir
        ))
        .command(format!(
            "cd {} && bench new-site {}",
            config.bench_dir, config.site_name
        ))
}
