//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::PathRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registered template search paths
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(
        &self,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Process exit status. Codes outside `0..=255` become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher resolving relative paths against `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        cli: &Cli,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Commands::Setup(args) => {
                let cmd = super::setup::SetupCommand::new(&self.working_dir, args.clone());
                cmd.execute(registry, ui)
            }
            Commands::Remove(args) => {
                let cmd = super::remove::RemoveCommand::new(&self.working_dir, args.clone());
                cmd.execute(registry, ui)
            }
            Commands::Paths => super::paths::PathsCommand.execute(registry, ui),
            Commands::Create(args) => {
                let cmd = super::create::CreateCommand::new(&self.working_dir, args.clone());
                cmd.execute(registry, ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(registry, ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn exit_status_does_not_wrap() {
        assert_eq!(CommandResult::success().exit_status(), 0);
        assert_eq!(CommandResult::failure(2).exit_status(), 2);
        assert_eq!(CommandResult::failure(256).exit_status(), 1);
        assert_eq!(CommandResult::failure(-1).exit_status(), 1);
    }

    #[test]
    fn dispatches_setup_then_paths() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("templates");
        std::fs::create_dir(&templates).unwrap();
        let mut registry = Configuration::new(temp.path().join("configuration.json"));
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let setup = Cli::parse_from(["boiler", "setup", "templates"]);
        let result = dispatcher.dispatch(&setup, &mut registry, &mut ui).unwrap();
        assert!(result.success);

        let paths = Cli::parse_from(["boiler", "paths"]);
        dispatcher.dispatch(&paths, &mut registry, &mut ui).unwrap();
        assert!(ui.has_message("templates"));
    }

    #[test]
    fn dispatches_create() {
        let temp = TempDir::new().unwrap();
        let mut registry = Configuration::new(temp.path().join("configuration.json"));
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["boiler", "create", "anything"]);
        let result = dispatcher.dispatch(&cli, &mut registry, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No paths configured"));
    }
}
