// file: src/steps/mod.rs
// version: 1.0.0
// guid: 1d6b83f0-47ae-4c29-95d1-e80237c4a6fb

//! Provisioning steps
//!
//! One module per phase of the install. Every module is a pure plan builder:
//! configuration in, [`PlanStep`] out, no host access. The driver assembles
//! the full plan here and hands it to a runner.

pub mod apps;
pub mod bench;
pub mod mariadb;
pub mod node;
pub mod packages;
pub mod production;
pub mod scheduler;
pub mod tls;

use crate::config::InstallConfig;
use crate::plan::Plan;

/// Build the complete ordered provisioning plan for one run
pub fn build_plan(config: &InstallConfig) -> Plan {
    let mut plan = Plan::default();
    plan.push(packages::plan(config));
    plan.push(mariadb::plan(config));
    plan.push(node::plan(config));
    plan.push(bench::cli_plan());
    plan.push(bench::workspace_plan(config));
    plan.push(apps::plan(config));
    plan.push(production::plan(config));
    plan.push(scheduler::plan(config));
    if !config.skip_tls {
        plan.push(tls::plan(config));
    }
    plan
}
