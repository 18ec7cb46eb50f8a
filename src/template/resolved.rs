//! Validated, typed templates.

/// A template that passed validation and is ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Display name from the `name` key.
    pub name: String,
    /// Steps in declaration order.
    pub steps: Vec<Step>,
}

/// One step of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Key the step is defined under and referenced by in `steps`.
    pub id: String,
    /// Human-readable name, printed when the step starts.
    pub name: String,
    /// Shell commands, run in order. A scalar `script` becomes one entry.
    pub script: Vec<String>,
}

impl Template {
    /// Total number of commands across all steps.
    pub fn command_count(&self) -> usize {
        self.steps.iter().map(|s| s.script.len()).sum()
    }

    /// Look up a step by id.
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }
}
