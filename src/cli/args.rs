//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Boiler - Create projects from reusable templates.
#[derive(Debug, Parser)]
#[command(name = "boiler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (overrides ~/.config/boiler/configuration.json)
    #[arg(short, long, global = true, env = "BOILER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output, including command output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set the directory as a place to search for boiler-templates
    Setup(DirectoryArgs),

    /// Remove the directory from the places to search for boiler-templates
    Remove(DirectoryArgs),

    /// List all paths to search for templates
    Paths,

    /// Create a project based on the given template
    Create(CreateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for `setup` and `remove`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DirectoryArgs {
    /// Directory to add or remove (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Vec<PathBuf>,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CreateArgs {
    /// Template to create the project from
    #[arg(value_name = "TEMPLATE")]
    pub template: Vec<String>,

    /// Which name must the directory to create have?
    #[arg(long)]
    pub dir: Option<String>,

    /// Which name must the project have?
    #[arg(long)]
    pub name: Option<String>,

    /// Stop at the first failing command
    #[arg(long)]
    pub fail_fast: bool,

    /// Show what would be done without creating anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
