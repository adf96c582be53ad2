// file: src/steps/tls.rs
// version: 1.0.0
// guid: b48f1c06-7e53-49d2-a6b8-1490e2d75f3a

//! TLS configuration via certbot's nginx plugin
//!
//! Multi-tenant DNS mode, domain registration, the certbot snap, and the
//! certificate request. The domain comes from configuration; when left at
//! the shipped placeholder the chain still runs (and certbot then fails on
//! DNS, which is the operator's signal to pass --domain).

use crate::config::InstallConfig;
use crate::plan::PlanStep;

pub fn plan(config: &InstallConfig) -> PlanStep {
    PlanStep::new("Configure TLS")
        .command(format!(
            "cd {} && bench config dns_multitenant on",
            config.bench_dir
        ))
        .command(format!(
            "cd {} && bench setup add-domain {} --site {}",
            config.bench_dir, config.domain, config.site_name
        ))
        .elevated("snap install core")
        .elevated("snap refresh core")
        .elevated("snap install --classic certbot")
        .elevated("ln -s /snap/bin/certbot /usr/bin/certbot")
        .elevated(format!("certbot --nginx -d {}", config.domain))
}
