//! The `boiler remove` command.

use std::path::{Path, PathBuf};

use crate::cli::args::DirectoryArgs;
use crate::config::PathRegistry;
use crate::error::{BoilerError, Result};
use crate::ui::UserInterface;

use super::directory::resolve_directory;
use super::dispatcher::{Command, CommandResult};

/// Unregisters a template search path.
pub struct RemoveCommand {
    working_dir: PathBuf,
    args: DirectoryArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(working_dir: &Path, args: DirectoryArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    fn remove(&self, registry: &mut dyn PathRegistry) -> Result<PathBuf> {
        let dir = resolve_directory(&self.args.directory, &self.working_dir)?;
        if !registry.remove_path(&dir) {
            return Err(BoilerError::PathNotRegistered {
                path: dir.display().to_string(),
            });
        }
        registry.save()?;
        Ok(dir)
    }
}

impl Command for RemoveCommand {
    fn execute(
        &self,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match self.remove(registry) {
            Ok(dir) => {
                tracing::info!("Removed search path {}", dir.display());
                ui.success("Directory successfully removed");
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}
