//! Boiler - Create projects from reusable templates.
//!
//! A template is a YAML file naming a project and an ordered list of shell
//! steps, optionally next to a directory of files to copy into the new
//! project. Templates are looked up in a list of registered search paths.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The persisted list of search paths
//! - [`error`] - Error types and result aliases
//! - [`scaffold`] - Creating a project from a template
//! - [`shell`] - Shell command execution
//! - [`steps`] - Running template steps
//! - [`template`] - Template lookup, merging, validation and copying
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use boiler::config::{Configuration, PathRegistry};
//! use boiler::scaffold::{ScaffoldOrchestrator, ScaffoldRequest};
//! use boiler::ui::MockUI;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let templates = TempDir::new().unwrap();
//! fs::write(
//!     templates.path().join("hello.yml"),
//!     "name: Hello\nsteps: [greet]\ngreet:\n  name: Greet\n  script: echo hi\n",
//! )
//! .unwrap();
//!
//! let work = TempDir::new().unwrap();
//! let mut registry = Configuration::new(work.path().join("configuration.json"));
//! registry.add_path(templates.path());
//!
//! let request = ScaffoldRequest {
//!     templates: vec!["hello".to_string()],
//!     ..Default::default()
//! };
//! let mut ui = MockUI::new();
//! let outcome = ScaffoldOrchestrator::new(&registry, work.path(), request).run(&mut ui);
//!
//! assert!(outcome.is_success());
//! assert!(ui.has_message("Installing Hello"));
//! assert!(work.path().join("hello").is_dir());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod shell;
pub mod steps;
pub mod template;
pub mod ui;

pub use error::{BoilerError, Result};
