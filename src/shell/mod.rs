//! Shell command execution.

pub mod command;

pub use command::{execute, shell_invocation, CommandOptions, CommandResult};
