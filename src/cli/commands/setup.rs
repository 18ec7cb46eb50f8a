//! The `boiler setup` command.

use std::path::{Path, PathBuf};

use crate::cli::args::DirectoryArgs;
use crate::config::PathRegistry;
use crate::error::{BoilerError, Result};
use crate::ui::UserInterface;

use super::directory::resolve_directory;
use super::dispatcher::{Command, CommandResult};

/// Registers a directory as a template search path.
pub struct SetupCommand {
    working_dir: PathBuf,
    args: DirectoryArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(working_dir: &Path, args: DirectoryArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    fn add(&self, registry: &mut dyn PathRegistry) -> Result<PathBuf> {
        let dir = resolve_directory(&self.args.directory, &self.working_dir)?;
        if !registry.add_path(&dir) {
            return Err(BoilerError::PathAlreadyRegistered {
                path: dir.display().to_string(),
            });
        }
        registry.save()?;
        Ok(dir)
    }
}

impl Command for SetupCommand {
    fn execute(
        &self,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match self.add(registry) {
            Ok(dir) => {
                tracing::info!("Added search path {}", dir.display());
                ui.success("Directory successfully added");
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(dir: &Path, args: &[&str]) -> SetupCommand {
        SetupCommand::new(
            dir,
            DirectoryArgs {
                directory: args.iter().map(PathBuf::from).collect(),
            },
        )
    }

    #[test]
    fn adds_directory_and_saves() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("templates")).unwrap();
        let config_file = temp.path().join("configuration.json");
        let mut registry = Configuration::new(&config_file);
        let mut ui = MockUI::new();

        let result = setup(temp.path(), &["templates"])
            .execute(&mut registry, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("Directory successfully added"));
        let reloaded = Configuration::load(&config_file).unwrap();
        assert_eq!(
            reloaded.list_paths(),
            [temp.path().join("templates").canonicalize().unwrap()]
        );
    }

    #[test]
    fn defaults_to_working_dir() {
        let temp = TempDir::new().unwrap();
        let mut registry = Configuration::new(temp.path().join("configuration.json"));
        let mut ui = MockUI::new();

        setup(temp.path(), &[]).execute(&mut registry, &mut ui).unwrap();

        assert_eq!(
            registry.list_paths(),
            [temp.path().canonicalize().unwrap()]
        );
    }

    #[test]
    fn already_added() {
        let temp = TempDir::new().unwrap();
        let mut registry = Configuration::new(temp.path().join("configuration.json"));
        let mut ui = MockUI::new();

        setup(temp.path(), &[]).execute(&mut registry, &mut ui).unwrap();
        let result = setup(temp.path(), &["."])
            .execute(&mut registry, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Folder already added"));
        assert_eq!(registry.list_paths().len(), 1);
    }

    #[test]
    fn missing_directory() {
        let temp = TempDir::new().unwrap();
        let config_file = temp.path().join("configuration.json");
        let mut registry = Configuration::new(&config_file);
        let mut ui = MockUI::new();

        let result = setup(temp.path(), &["missing"])
            .execute(&mut registry, &mut ui)
            .unwrap();

        assert!(!result.success);
        assert!(ui.has_error("Directory does not exist"));
        assert!(!config_file.exists());
    }

    #[test]
    fn only_one_directory() {
        let temp = TempDir::new().unwrap();
        let mut registry = Configuration::new(temp.path().join("configuration.json"));
        let mut ui = MockUI::new();

        setup(temp.path(), &["a", "b"])
            .execute(&mut registry, &mut ui)
            .unwrap();

        assert!(ui.has_error("Only one directory is allowed"));
    }
}
