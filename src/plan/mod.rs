// file: src/plan/mod.rs
// version: 1.0.0
// guid: 6b1f0a83-2c5d-4e67-9a01-f43d28c6b7e5

//! Typed provisioning plan
//!
//! Each provisioning step is a pure function from configuration to a
//! [`PlanStep`]: an ordered list of actions (shell commands or config-file
//! appends). The assembled [`Plan`] is executed by a runner, which keeps the
//! command construction testable without touching the host.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single shell command line, optionally run under sudo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub line: String,
    pub sudo: bool,
}

impl CommandSpec {
    /// Command run as the invoking user
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            sudo: false,
        }
    }

    /// Command run with the sudo prefix
    pub fn elevated(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            sudo: true,
        }
    }

    /// The final command line as handed to the shell
    pub fn rendered(&self) -> String {
        if self.sudo {
            format!("sudo {}", self.line)
        } else {
            self.line.clone()
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered())
    }
}

/// One observable side effect of the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Execute a shell command and fail the run on non-zero exit
    Command(CommandSpec),
    /// Append a fixed block to a config file (not idempotent by design)
    AppendFile { path: PathBuf, content: String },
}

/// A named, ordered group of actions
#[derive(Debug, Clone, Serialize)]
pub struct PlanStep {
    pub name: &'static str,
    pub actions: Vec<Action>,
}

impl PlanStep {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            actions: Vec::new(),
        }
    }

    /// Append an unelevated command
    pub fn command(mut self, line: impl Into<String>) -> Self {
        self.actions.push(Action::Command(CommandSpec::new(line)));
        self
    }

    /// Append a sudo-prefixed command
    pub fn elevated(mut self, line: impl Into<String>) -> Self {
        self.actions
            .push(Action::Command(CommandSpec::elevated(line)));
        self
    }

    /// Append a config-file append action
    pub fn append_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.actions.push(Action::AppendFile {
            path: path.into(),
            content: content.into(),
        });
        self
    }
}

/// The full ordered provisioning plan
#[derive(Debug, Clone, Default, Serialize)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    pub fn push(&mut self, step: PlanStep) {
        self.steps.push(step);
    }

    /// All actions across steps, in execution order
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.steps.iter().flat_map(|s| s.actions.iter())
    }

    /// Rendered command lines only, in execution order (appends excluded)
    pub fn rendered_commands(&self) -> Vec<String> {
        self.actions()
            .filter_map(|action| match action {
                Action::Command(spec) => Some(spec.rendered()),
                Action::AppendFile { .. } => None,
            })
            .collect()
    }

    /// Machine-readable plan, for `--dry-run --json`
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::InstallError::system(format!("failed to serialize plan: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_adds_sudo_prefix() {
        let spec = CommandSpec::elevated("apt-get install -y git");
        assert_eq!(spec.rendered(), "sudo apt-get install -y git");

        let spec = CommandSpec::new("bench new-site mysite.local");
        assert_eq!(spec.rendered(), "bench new-site mysite.local");
    }

    #[test]
    fn test_step_builder_preserves_order() {
        let step = PlanStep::new("demo")
            .elevated("first")
            .command("second")
            .append_file("/etc/demo.cnf", "block");

        assert_eq!(step.actions.len(), 3);
        assert!(matches!(
            &step.actions[0],
            Action::Command(spec) if spec.sudo
        ));
        assert!(matches!(
            &step.actions[2],
            Action::AppendFile { path, .. } if path == &PathBuf::from("/etc/demo.cnf")
        ));
    }

    #[test]
    fn test_rendered_commands_skips_appends() {
        let mut plan = Plan::default();
        plan.push(
            PlanStep::new("demo")
                .elevated("service mysql restart")
                .append_file("/etc/mysql/my.cnf", "[mysqld]\n"),
        );

        assert_eq!(
            plan.rendered_commands(),
            vec!["sudo service mysql restart".to_string()]
        );
    }

    #[test]
    fn test_plan_json_is_stable() {
        let mut plan = Plan::default();
        plan.push(PlanStep::new("demo").command("true"));
        let json = plan.to_json().unwrap();
        assert!(json.contains("\"name\": \"demo\""));
        assert!(json.contains("\"kind\": \"command\""));
    }
}
