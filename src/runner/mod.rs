// file: src/runner/mod.rs
// version: 1.0.0
// guid: e07c4f92-ab38-4d15-86e9-3b50d1c7a284

//! Plan interpreters
//!
//! [`ShellRunner`] is the real thing: each command is handed to `bash -c`
//! with stdio inherited, so the invoked tools talk to the operator directly.
//! [`RecordingRunner`] swaps in for tests and records what would have run.
//! Execution is fail-fast: the first non-zero exit aborts the run with no
//! retry and no rollback.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::plan::{Action, CommandSpec, Plan};
use crate::{InstallError, Result};

/// Interpreter seam between the plan and the host
#[async_trait]
pub trait Interpreter: Send {
    /// Run one shell command, failing on non-zero exit
    async fn run_command(&mut self, spec: &CommandSpec) -> Result<()>;

    /// Append a block to a config file
    async fn append_file(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Execute a plan through the given interpreter, in order, fail-fast
pub async fn execute_plan(plan: &Plan, interpreter: &mut dyn Interpreter) -> Result<()> {
    let total = plan.steps.len();
    for (index, step) in plan.steps.iter().enumerate() {
        info!("[{}/{}] {}", index + 1, total, step.name);
        for action in &step.actions {
            match action {
                Action::Command(spec) => interpreter.run_command(spec).await?,
                Action::AppendFile { path, content } => {
                    interpreter.append_file(path, content).await?
                }
            }
        }
    }
    Ok(())
}

/// Real interpreter: `bash -c` with the agent's stdio
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Interpreter for ShellRunner {
    async fn run_command(&mut self, spec: &CommandSpec) -> Result<()> {
        let rendered = spec.rendered();
        info!("running: {}", rendered);

        let status = tokio::process::Command::new("bash")
            .arg("-c")
            .arg(&rendered)
            .status()
            .await
            .map_err(|e| {
                InstallError::system(format!("failed to spawn `{}`: {}", rendered, e))
            })?;

        if !status.success() {
            return Err(InstallError::ProcessError {
                command: rendered,
                exit_code: status.code(),
            });
        }

        debug!("command succeeded");
        Ok(())
    }

    async fn append_file(&mut self, path: &Path, content: &str) -> Result<()> {
        info!("appending {} bytes to {}", content.len(), path.display());

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .await
            .map_err(|e| {
                InstallError::system(format!("failed to open {} for append: {}", path.display(), e))
            })?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// What a [`RecordingRunner`] saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Command(String),
    Append { path: PathBuf, content: String },
}

/// Test interpreter that records rendered actions and always succeeds
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub history: Vec<Recorded>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded command lines only, in order
    pub fn commands(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|r| match r {
                Recorded::Command(line) => Some(line.as_str()),
                Recorded::Append { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Interpreter for RecordingRunner {
    async fn run_command(&mut self, spec: &CommandSpec) -> Result<()> {
        self.history.push(Recorded::Command(spec.rendered()));
        Ok(())
    }

    async fn append_file(&mut self, path: &Path, content: &str) -> Result<()> {
        self.history.push(Recorded::Append {
            path: path.to_path_buf(),
            content: content.to_string(),
        });
        Ok(())
    }
}
