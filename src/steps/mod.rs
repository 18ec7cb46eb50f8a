//! Step execution.
//!
//! - [`StepExecutor`] runs the steps of a [`Template`](crate::template::Template)
//! - [`FailurePolicy`] decides whether a failing command stops the run
//! - [`ExecutionReport`] records what ran and what failed
//!
//! # Example
//!
//! ```no_run
//! use boiler::steps::{FailurePolicy, StepExecutor};
//! use boiler::template::{resolve, VariableBindings};
//! use boiler::ui::MockUI;
//! use std::path::PathBuf;
//!
//! let template = resolve("web", &[PathBuf::from("/templates")]).unwrap();
//! let mut ui = MockUI::new();
//!
//! let report = StepExecutor::new("/tmp/web")
//!     .with_policy(FailurePolicy::Abort)
//!     .run(&template, &VariableBindings::for_project("web"), &mut ui)
//!     .unwrap();
//! assert!(report.success());
//! ```

pub mod executor;

pub use executor::{CommandFailure, ExecutionReport, FailurePolicy, StepExecutor, StepResult};
