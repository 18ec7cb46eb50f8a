//! Template lookup, merging, validation and materialization.
//!
//! This module turns a template name into something runnable:
//! - Lookup across search paths in [`locator`]
//! - Parsing into an untyped document in [`document`]
//! - Include merging in [`merger`]
//! - Structural validation in [`validator`]
//! - Placeholder substitution in [`variables`]
//! - Asset copying in [`materializer`]
//!
//! # Example
//!
//! ```
//! use boiler::template::resolve;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("hello.yml"),
//!     "name: Hello\nsteps: [greet]\ngreet:\n  name: Greet\n  script: echo hi\n",
//! )
//! .unwrap();
//!
//! let template = resolve("hello", &[temp.path().to_path_buf()]).unwrap();
//! assert_eq!(template.name, "Hello");
//! assert_eq!(template.steps[0].script, vec!["echo hi"]);
//! ```

pub mod document;
pub mod locator;
pub mod materializer;
pub mod merger;
pub mod resolved;
pub mod validator;
pub mod variables;

use std::path::PathBuf;

use crate::error::{BoilerError, Result};

pub use document::{Mapping, Node, ShapeError, TemplateDocument};
pub use locator::{definition_file_name, TemplateLocator};
pub use materializer::{materialize, MaterializeReport};
pub use merger::merge_includes;
pub use resolved::{Step, Template};
pub use validator::{validate, ValidationError};
pub use variables::{placeholder, substitute, VariableBindings, PROJECT_NAME};

/// Locate, parse, merge and validate the template called `name`.
///
/// # Errors
///
/// - `TemplateNotFound` if no search path has a definition for `name`
/// - `TemplateParseError` / `TemplateNotMapping` if the file is not a YAML mapping
/// - `Validation` for include and structure problems
pub fn resolve(name: &str, search_paths: &[PathBuf]) -> Result<Template> {
    let locator = TemplateLocator::new(search_paths);

    let path = locator
        .find(name)
        .ok_or_else(|| BoilerError::TemplateNotFound {
            name: name.to_string(),
        })?;
    tracing::debug!("Resolved template {} to {}", name, path.display());

    let document = TemplateDocument::parse(&path)?;
    let merged = merge_includes(document, &locator)?;
    let template = validate(&merged)?;

    tracing::debug!(
        "Template {} has {} steps and {} commands",
        template.name,
        template.steps.len(),
        template.command_count()
    );

    Ok(template)
}
