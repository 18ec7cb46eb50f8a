//! Error types for Boiler operations.
//!
//! This module defines [`BoilerError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural problems in a template are [`ValidationError`]s
//! - Use `anyhow::Error` (via `BoilerError::Other`) for unexpected errors
//! - Every variant renders as a single line suitable for the terminal

use std::path::PathBuf;
use thiserror::Error;

use crate::template::{ShapeError, ValidationError};

/// Core error type for Boiler operations.
#[derive(Debug, Error)]
pub enum BoilerError {
    /// No search paths have been registered.
    #[error("No paths configured")]
    NoPathsConfigured,

    /// The configuration file exists but could not be read as JSON.
    #[error("Failed to parse configuration at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No template argument was supplied.
    #[error("No template given")]
    NoTemplateGiven,

    /// More than one template argument was supplied.
    #[error("Only one template is allowed")]
    MultipleTemplates,

    /// More than one directory argument was supplied.
    #[error("Only one directory is allowed")]
    MultipleDirectories,

    /// Template lookup across all search paths failed.
    #[error("No template found with name {name}")]
    TemplateNotFound { name: String },

    /// The template file is not well-formed YAML.
    #[error("Template file located at `{}` could not be parsed", path.display())]
    TemplateParseError { path: PathBuf, message: String },

    /// The template parsed but is not a mapping.
    #[error("Template could not be parsed as a yaml file")]
    TemplateNotMapping { path: PathBuf },

    /// The template failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The destination directory is already present.
    #[error("Folder already exists")]
    FolderExists { path: PathBuf },

    /// A directory handed to `setup` or `remove` does not exist.
    #[error("Directory does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// The directory is already a registered search path.
    #[error("Folder already added")]
    PathAlreadyRegistered { path: String },

    /// The directory is not a registered search path.
    #[error("Folder not in paths")]
    PathNotRegistered { path: String },

    /// The working directory of the process could not be determined.
    #[error("Current directory could not be determined: {0}")]
    CurrentDirUnavailable(std::io::Error),

    /// Step execution failed (only raised when failing fast).
    #[error("Step '{step}' failed: {message}")]
    StepExecutionError { step: String, message: String },

    /// Shell command could not be started.
    #[error("Failed to run `{command}`")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ShapeError> for BoilerError {
    fn from(err: ShapeError) -> Self {
        Self::Validation(ValidationError::Shape(err))
    }
}

/// Result type alias for Boiler operations.
pub type Result<T> = std::result::Result<T, BoilerError>;
