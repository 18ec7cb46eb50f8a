//! Step execution engine.
//!
//! Runs the commands of a validated template, in order, inside the project
//! directory. Every command line goes through placeholder substitution
//! first.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{BoilerError, Result};
use crate::shell::{execute, CommandOptions};
use crate::template::{substitute, Step, Template, VariableBindings};
use crate::ui::UserInterface;

/// What to do when a command exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Warn and keep going with the next command.
    #[default]
    Continue,
    /// Stop at the first failing command.
    Abort,
}

/// A command that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The command line after substitution.
    pub command: String,
    /// Exit code, if the command ran and exited normally.
    pub exit_code: Option<i32>,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandFailure {
    /// One-line description for warnings and errors.
    pub fn describe(&self) -> String {
        match self.exit_code {
            Some(code) => format!("`{}` exited with code {}", self.command, code),
            None => format!("`{}` could not be run", self.command),
        }
    }
}

/// Result of executing one step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Step id.
    pub id: String,

    /// Step display name.
    pub name: String,

    /// Number of commands that were run.
    pub commands_run: usize,

    /// Commands that failed.
    pub failures: Vec<CommandFailure>,

    /// Execution duration.
    pub duration: Duration,
}

impl StepResult {
    /// Whether every command of the step succeeded.
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of executing a whole template.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    /// One entry per step, in execution order.
    pub steps: Vec<StepResult>,
}

impl ExecutionReport {
    /// Whether every step succeeded.
    pub fn success(&self) -> bool {
        self.steps.iter().all(StepResult::success)
    }

    /// Total number of failed commands.
    pub fn failure_count(&self) -> usize {
        self.steps.iter().map(|s| s.failures.len()).sum()
    }

    /// Total duration of all steps.
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

/// Runs template steps in a working directory.
#[derive(Debug, Clone)]
pub struct StepExecutor {
    working_dir: PathBuf,
    policy: FailurePolicy,
}

impl StepExecutor {
    /// Create an executor running commands in `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            policy: FailurePolicy::default(),
        }
    }

    /// Set the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Directory commands are run in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run every step of `template`, sequentially and in declared order.
    ///
    /// # Errors
    ///
    /// Returns `StepExecutionError` for the first failing command, but only
    /// under [`FailurePolicy::Abort`].
    pub fn run(
        &self,
        template: &Template,
        bindings: &VariableBindings,
        ui: &mut dyn UserInterface,
    ) -> Result<ExecutionReport> {
        let mut report = ExecutionReport::default();

        for step in &template.steps {
            ui.message(&format!("Executing {}", step.name));
            let result = self.run_step(step, bindings, ui)?;
            report.steps.push(result);
        }

        tracing::info!(
            "Ran {} steps with {} failed commands in {:?}",
            report.steps.len(),
            report.failure_count(),
            report.duration()
        );

        Ok(report)
    }

    fn run_step(
        &self,
        step: &Step,
        bindings: &VariableBindings,
        ui: &mut dyn UserInterface,
    ) -> Result<StepResult> {
        let options = CommandOptions {
            cwd: Some(self.working_dir.clone()),
            capture_stdout: true,
            capture_stderr: true,
        };

        let mut result = StepResult {
            id: step.id.clone(),
            name: step.name.clone(),
            commands_run: 0,
            failures: Vec::new(),
            duration: Duration::ZERO,
        };

        for line in &step.script {
            let command = substitute(line, bindings);
            tracing::debug!("Running `{}` in {}", command, self.working_dir.display());

            result.commands_run += 1;
            let failure = match execute(&command, &options) {
                Ok(output) => {
                    result.duration += output.duration;
                    ui.command_output(&output.stdout);
                    if output.success {
                        None
                    } else {
                        Some(CommandFailure {
                            command,
                            exit_code: output.exit_code,
                            stderr: output.stderr,
                        })
                    }
                }
                Err(e) => {
                    tracing::debug!("{}", e);
                    Some(CommandFailure {
                        command,
                        exit_code: None,
                        stderr: String::new(),
                    })
                }
            };

            if let Some(failure) = failure {
                if self.policy == FailurePolicy::Abort {
                    return Err(BoilerError::StepExecutionError {
                        step: step.name.clone(),
                        message: failure.describe(),
                    });
                }

                ui.warning(&failure.describe());
                if !failure.stderr.trim().is_empty() {
                    ui.warning(failure.stderr.trim_end());
                }
                result.failures.push(failure);
            }
        }

        Ok(result)
    }
}
