//! The `boiler paths` command.

use crate::config::PathRegistry;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Lists the registered search paths.
pub struct PathsCommand;

impl Command for PathsCommand {
    fn execute(
        &self,
        registry: &mut dyn PathRegistry,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let paths = registry.list_paths();

        if paths.is_empty() {
            ui.message("No paths set...");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Path"]);
        for path in paths {
            table.add_row(&[path.display().to_string()]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::ui::MockUI;
    use std::path::Path;

    #[test]
    fn no_paths() {
        let mut registry = Configuration::new("/unused.json");
        let mut ui = MockUI::new();

        let result = PathsCommand.execute(&mut registry, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), ["No paths set..."]);
    }

    #[test]
    fn lists_paths_in_a_table() {
        let mut registry = Configuration::new("/unused.json");
        registry.add_path(Path::new("/first"));
        registry.add_path(Path::new("/second"));
        let mut ui = MockUI::new();

        PathsCommand.execute(&mut registry, &mut ui).unwrap();

        let table = &ui.messages()[0];
        assert!(table.contains("│ Path    │"));
        let first = table.find("/first").unwrap();
        let second = table.find("/second").unwrap();
        assert!(first < second);
    }
}
