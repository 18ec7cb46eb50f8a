//! Creating a project from a template.
//!
//! [`ScaffoldOrchestrator`] ties the pieces together: it resolves the
//! template through the registered search paths, creates the project
//! directory, copies template assets and runs the steps.

pub mod orchestrator;

pub use orchestrator::{ScaffoldOrchestrator, ScaffoldOutcome, ScaffoldRequest};
