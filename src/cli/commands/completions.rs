//! Shell completions generation.
//!
//! The `boiler completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::config::PathRegistry;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Write the completion script to `out`.
    pub fn generate(&self, out: &mut dyn std::io::Write) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "boiler", out);
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _registry: &mut dyn PathRegistry,
        _ui: &mut dyn UserInterface,
    ) -> crate::error::Result<CommandResult> {
        self.generate(&mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        CompletionsCommand::new(CompletionsArgs { shell }).generate(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = script(Shell::Bash);
        assert!(output.contains("boiler"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = script(Shell::Zsh);
        assert!(output.contains("boiler"));
        assert!(output.contains("create"));
    }

    #[test]
    fn generates_fish_completions() {
        assert!(script(Shell::Fish).contains("boiler"));
    }
}
