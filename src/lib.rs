// file: src/lib.rs
// version: 1.0.0
// guid: 9c4d2e71-5a38-4f90-b6c2-1d8e37a54f09

//! # ERPNext Install Agent
//!
//! Automated ERPNext/Frappe provisioning for fresh Debian/Ubuntu hosts.
//!
//! The agent turns the classic manual install runbook (apt packages, MariaDB
//! hardening, nvm/Node/yarn, frappe-bench, site creation, ERPNext app,
//! production supervisor/nginx, scheduler, certbot TLS) into a typed,
//! ordered plan of shell actions executed fail-fast through a swappable
//! interpreter. Nothing is retried and nothing is rolled back: a failed
//! external command aborts the run, exactly like the runbook it replaces.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod runner;
pub mod steps;
pub mod utils;

pub use error::{InstallError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
