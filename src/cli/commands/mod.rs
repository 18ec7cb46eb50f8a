//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The path registry is loaded once
//! by the caller and handed to every command.

pub mod completions;
pub mod create;
pub mod directory;
pub mod dispatcher;
pub mod paths;
pub mod remove;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
