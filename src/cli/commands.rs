// file: src/cli/commands.rs
// version: 1.0.0
// guid: 5c19f7d4-a260-4b83-97e5-31d08c6f42ba

//! Command implementations

use colored::Colorize;
use tracing::{info, warn};

use crate::cli::args::Cli;
use crate::config::{ConfigLoader, InstallConfig, PLACEHOLDER_DOMAIN};
use crate::plan::{Action, Plan};
use crate::runner::{execute_plan, ShellRunner};
use crate::steps;
use crate::utils::SystemUtils;
use crate::Result;

/// Resolve CLI arguments and settings into a validated config
pub fn resolve_config(cli: &Cli) -> Result<InstallConfig> {
    let mut config = InstallConfig::new(cli.site_name.as_str(), cli.mysql_root_password.as_str());

    if let Some(path) = &cli.settings {
        let settings = ConfigLoader::new().load_settings(path)?;
        config.apply_settings(settings);
    }
    if let Some(domain) = &cli.domain {
        config.domain = domain.clone();
    }
    config.skip_tls = cli.skip_tls;

    config.validate()?;
    Ok(config)
}

/// The single top-level operation: build the plan and run (or print) it
pub async fn install_command(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let plan = steps::build_plan(&config);

    if cli.dry_run {
        if cli.json {
            println!("{}", plan.to_json()?);
        } else {
            print_plan(&plan);
        }
        return Ok(());
    }

    if !config.skip_tls && config.domain_is_placeholder() {
        warn!(
            "TLS domain left at the shipped placeholder `{}`; pass --domain (or --skip-tls) for a usable certificate",
            PLACEHOLDER_DOMAIN
        );
    }

    SystemUtils::check_prerequisites()?;
    if !SystemUtils::is_root() {
        info!("not running as root; elevated commands will go through sudo");
    }

    info!("Starting ERPNext setup for site: {}", config.site_name);
    let mut runner = ShellRunner::new();
    execute_plan(&plan, &mut runner).await?;

    info!(
        "ERPNext installation complete; visit http://<server-ip> or https://{}",
        config.domain
    );
    Ok(())
}

/// Human-readable dry-run output
fn print_plan(plan: &Plan) {
    let total = plan.steps.len();
    for (index, step) in plan.steps.iter().enumerate() {
        println!(
            "{} {}",
            format!("[{}/{}]", index + 1, total).cyan().bold(),
            step.name.bold()
        );
        for action in &step.actions {
            match action {
                Action::Command(spec) => println!("  $ {}", spec.rendered()),
                Action::AppendFile { path, content } => println!(
                    "  {} {} ({} bytes)",
                    ">>".yellow(),
                    path.display(),
                    content.len()
                ),
            }
        }
    }
}
