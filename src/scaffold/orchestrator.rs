//! Project scaffolding orchestration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::PathRegistry;
use crate::error::{BoilerError, Result};
use crate::steps::{ExecutionReport, FailurePolicy, StepExecutor};
use crate::template::{
    materialize, resolve, substitute, MaterializeReport, Template, VariableBindings,
};
use crate::ui::UserInterface;

/// Options for one `create` invocation.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldRequest {
    /// Template arguments as given. Exactly one is accepted.
    pub templates: Vec<String>,
    /// Directory to create, relative to the working directory.
    pub dir: Option<String>,
    /// Project display name, overriding the template's `name`.
    pub name: Option<String>,
    /// What to do when a command fails.
    pub policy: FailurePolicy,
    /// Print the plan without touching anything.
    pub dry_run: bool,
}

/// How a scaffold run ended.
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// The project directory was created and every step ran.
    Created {
        project_dir: PathBuf,
        assets: MaterializeReport,
        report: ExecutionReport,
    },
    /// Dry run; the plan was printed.
    Planned { project_dir: PathBuf },
    /// An error was reported to the user.
    Failed,
}

impl ScaffoldOutcome {
    /// Whether the run should exit successfully.
    pub fn is_success(&self) -> bool {
        !matches!(self, ScaffoldOutcome::Failed)
    }
}

/// Turns a template name into a new project directory.
pub struct ScaffoldOrchestrator<'a> {
    registry: &'a dyn PathRegistry,
    working_dir: PathBuf,
    request: ScaffoldRequest,
}

impl<'a> ScaffoldOrchestrator<'a> {
    /// Create an orchestrator resolving the new directory against `working_dir`.
    pub fn new(
        registry: &'a dyn PathRegistry,
        working_dir: impl Into<PathBuf>,
        request: ScaffoldRequest,
    ) -> Self {
        Self {
            registry,
            working_dir: working_dir.into(),
            request,
        }
    }

    /// Run the scaffold. Any failure is reported once through `ui`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> ScaffoldOutcome {
        match self.try_run(ui) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Scaffold failed: {:?}", e);
                ui.error(&e.to_string());
                ScaffoldOutcome::Failed
            }
        }
    }

    fn try_run(&self, ui: &mut dyn UserInterface) -> Result<ScaffoldOutcome> {
        let search_paths = self.registry.list_paths();
        if search_paths.is_empty() {
            return Err(BoilerError::NoPathsConfigured);
        }

        let template_arg = self.template_argument()?;
        let template = resolve(template_arg, search_paths)?;

        // Empty --name and --dir fall back like absent ones.
        let project_name = self
            .request
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&template.name)
            .to_string();
        let dir_name = self
            .request
            .dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .unwrap_or(template_arg);
        let project_dir = self.working_dir.join(dir_name);
        let bindings = VariableBindings::for_project(&project_name);

        if self.request.dry_run {
            self.print_plan(&template, &project_name, &project_dir, &bindings, ui);
            return Ok(ScaffoldOutcome::Planned { project_dir });
        }

        create_project_dir(&project_dir)?;
        ui.message(&format!("Installing {}", project_name));
        tracing::info!(
            "Scaffolding {} from {} into {}",
            project_name,
            template_arg,
            project_dir.display()
        );

        let assets = materialize(template_arg, search_paths, &project_dir, &bindings)?;

        let report = StepExecutor::new(&project_dir)
            .with_policy(self.request.policy)
            .run(&template, &bindings, ui)?;

        Ok(ScaffoldOutcome::Created {
            project_dir,
            assets,
            report,
        })
    }

    fn template_argument(&self) -> Result<&str> {
        match self.request.templates.as_slice() {
            [] => Err(BoilerError::NoTemplateGiven),
            [template] => Ok(template.as_str()),
            _ => Err(BoilerError::MultipleTemplates),
        }
    }

    fn print_plan(
        &self,
        template: &Template,
        project_name: &str,
        project_dir: &Path,
        bindings: &VariableBindings,
        ui: &mut dyn UserInterface,
    ) {
        ui.show_header(&format!("Would install {}", project_name));
        ui.message(&format!("Directory: {}", project_dir.display()));
        if project_dir.exists() {
            ui.warning("Folder already exists");
        }

        for step in &template.steps {
            ui.message(&format!("Executing {}", step.name));
            for line in &step.script {
                ui.message(&format!("  $ {}", substitute(line, bindings)));
            }
        }
    }
}

/// Create `dir`, failing if anything is already there.
fn create_project_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(BoilerError::FolderExists {
            path: dir.to_path_buf(),
        }),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to create {}", dir.display()))
            .map_err(BoilerError::from),
    }
}
