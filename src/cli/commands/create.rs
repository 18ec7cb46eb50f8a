//! The `boiler create` command.

use std::path::{Path, PathBuf};

use crate::cli::args::CreateArgs;
use crate::config::PathRegistry;
use crate::error::Result;
use crate::scaffold::{ScaffoldOrchestrator, ScaffoldOutcome, ScaffoldRequest};
use crate::steps::FailurePolicy;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Creates a project from a template.
pub struct CreateCommand {
    working_dir: PathBuf,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(working_dir: &Path, args: CreateArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    fn request(&self) -> ScaffoldRequest {
        ScaffoldRequest {
            templates: self.args.template.clone(),
            dir: self.args.dir.clone(),
            name: self.args.name.clone(),
            policy: if self.args.fail_fast {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
            dry_run: self.args.dry_run,
        }
    }
}

impl Command for CreateCommand {
    fn execute(
        &self,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let orchestrator = ScaffoldOrchestrator::new(&*registry, &self.working_dir, self.request());

        match orchestrator.run(ui) {
            ScaffoldOutcome::Created { report, .. } if !report.success() => {
                ui.warning(&format!(
                    "Project created, but {} command(s) failed",
                    report.failure_count()
                ));
                Ok(CommandResult::success())
            }
            ScaffoldOutcome::Failed => Ok(CommandResult::failure(1)),
            _ => Ok(CommandResult::success()),
        }
    }
}
