// file: src/main.rs
// version: 1.0.0
// guid: 8b60d3a7-42fe-49c1-951a-67e0f2d8c435

//! ERPNext Install Agent - Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use erpnext_install_agent::{
    cli::{args::Cli, args::USAGE, commands::install_command},
    logging::logger,
};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                std::process::exit(0);
            }
            _ => {
                // Wrong argument shape: usage on stdout, exit status 1.
                println!("{USAGE}");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = install_command(cli).await {
        error!("{e}");
        std::process::exit(1);
    }
}
