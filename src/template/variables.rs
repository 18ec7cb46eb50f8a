//! Placeholder substitution.
//!
//! Templates may reference per-run values through literal placeholder
//! tokens of the form `{#NAME#}`. Substitution is plain text replacement:
//! no escaping, no expressions, and tokens without a binding are left as
//! they are.
//!
//! # Example
//!
//! ```
//! use boiler::template::{substitute, VariableBindings};
//!
//! let bindings = VariableBindings::for_project("Demo");
//! assert_eq!(substitute("hello {#PROJECT_NAME#}", &bindings), "hello Demo");
//! ```

use std::collections::BTreeMap;

/// Name of the project-name placeholder (`{#PROJECT_NAME#}`).
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// Values for the placeholders of one scaffold run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBindings {
    values: BTreeMap<String, String>,
}

impl VariableBindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for a scaffold of the project called `project_name`.
    pub fn for_project(project_name: &str) -> Self {
        let mut bindings = Self::new();
        bindings.insert(PROJECT_NAME, project_name);
        bindings
    }

    /// Bind `name` (without the `{# #}` delimiters) to `value`.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterate over `(placeholder token, value)` pairs.
    pub fn tokens(&self) -> impl Iterator<Item = (String, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (placeholder(name), value.as_str()))
    }

    /// True if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The literal token for `name`: `{#NAME#}`.
pub fn placeholder(name: &str) -> String {
    format!("{{#{}#}}", name)
}

/// Replace every bound placeholder in `text`.
pub fn substitute(text: &str, bindings: &VariableBindings) -> String {
    let mut result = text.to_string();
    for (token, value) in bindings.tokens() {
        if result.contains(&token) {
            result = result.replace(&token, value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_wraps_name() {
        assert_eq!(placeholder("PROJECT_NAME"), "{#PROJECT_NAME#}");
    }

    #[test]
    fn substitutes_project_name() {
        let bindings = VariableBindings::for_project("Demo");
        assert_eq!(substitute("hello {#PROJECT_NAME#}", &bindings), "hello Demo");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let bindings = VariableBindings::for_project("app");
        assert_eq!(
            substitute("{#PROJECT_NAME#}/{#PROJECT_NAME#}.txt", &bindings),
            "app/app.txt"
        );
    }

    #[test]
    fn unbound_tokens_are_left_verbatim() {
        let bindings = VariableBindings::for_project("app");
        assert_eq!(
            substitute("{#AUTHOR#} wrote {#PROJECT_NAME#}", &bindings),
            "{#AUTHOR#} wrote app"
        );
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let bindings = VariableBindings::for_project("app");
        assert_eq!(substitute("composer install", &bindings), "composer install");
    }

    #[test]
    fn substitution_is_literal() {
        let bindings = VariableBindings::for_project("$1 (.*)");
        assert_eq!(substitute("[{#PROJECT_NAME#}]", &bindings), "[$1 (.*)]");
    }

    #[test]
    fn substitution_is_idempotent() {
        let bindings = VariableBindings::for_project("Demo");
        let once = substitute("echo {#PROJECT_NAME#} > name.txt", &bindings);
        assert_eq!(substitute(&once, &bindings), once);
    }

    #[test]
    fn empty_bindings_change_nothing() {
        let bindings = VariableBindings::new();
        assert!(bindings.is_empty());
        assert_eq!(substitute("{#PROJECT_NAME#}", &bindings), "{#PROJECT_NAME#}");
    }

    #[test]
    fn extra_bindings_apply() {
        let mut bindings = VariableBindings::for_project("app");
        bindings.insert("VENDOR", "acme");
        assert_eq!(bindings.get("VENDOR"), Some("acme"));
        assert_eq!(
            substitute("{#VENDOR#}/{#PROJECT_NAME#}", &bindings),
            "acme/app"
        );
    }
}
