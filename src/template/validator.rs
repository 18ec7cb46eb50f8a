//! Structural validation of merged template documents.
//!
//! Validation checks, in order:
//! - `name` is present and non-empty
//! - `steps` is a non-empty sequence
//! - every step id in `steps` is a top-level key
//! - every referenced step has a `name` and a `script`
//!
//! The first violation is returned; a document that passes is converted
//! into a typed [`Template`].

use thiserror::Error;

use super::document::{Node, ShapeError, TemplateDocument};
use super::resolved::{Step, Template};

/// Why a template (or one of its includes) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` is missing or empty.
    #[error("no name defined")]
    NoName,

    /// `steps` is missing, not a sequence, or empty.
    #[error("no steps defined")]
    NoSteps,

    /// A step id listed in `steps` has no definition.
    #[error("step {0} does not exist")]
    UnknownStep(String),

    /// A step definition lacks `name`.
    #[error("no name set for step {0}")]
    StepWithoutName(String),

    /// A step definition lacks `script`.
    #[error("no script set for step {0}")]
    StepWithoutScript(String),

    /// `include` is present but not a sequence.
    #[error("include must be an array")]
    IncludeNotSequence,

    /// An included template could not be located.
    #[error("included file {0} does not exist")]
    IncludeNotFound(String),

    /// An included template is malformed, empty, or not a mapping.
    #[error("included file {0} cannot be parsed")]
    IncludeUnparsable(String),

    /// A value has the wrong shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Validate a merged document and convert it into a [`Template`].
pub fn validate(doc: &TemplateDocument) -> Result<Template, ValidationError> {
    let name = match doc.get("name") {
        Some(node) if !node.is_empty() => node.as_scalar("name")?.to_string(),
        _ => return Err(ValidationError::NoName),
    };

    let step_ids = match doc.get("steps") {
        Some(Node::Sequence(items)) if !items.is_empty() => items,
        _ => return Err(ValidationError::NoSteps),
    };

    let mut steps = Vec::with_capacity(step_ids.len());
    for id_node in step_ids {
        let id = id_node.as_scalar("steps")?;
        steps.push(validate_step(doc, id)?);
    }

    Ok(Template { name, steps })
}

fn validate_step(doc: &TemplateDocument, id: &str) -> Result<Step, ValidationError> {
    let definition = doc
        .get(id)
        .ok_or_else(|| ValidationError::UnknownStep(id.to_string()))?;

    let fields = match definition {
        Node::Mapping(fields) => fields,
        Node::Null => return Err(ValidationError::StepWithoutName(id.to_string())),
        other => return Err(ShapeError::new(id, "a mapping", other.kind()).into()),
    };

    let name = fields
        .get("name")
        .ok_or_else(|| ValidationError::StepWithoutName(id.to_string()))?;
    let name = match name {
        Node::Null => String::new(),
        other => other.as_scalar(&format!("{}.name", id))?.to_string(),
    };

    let script = fields
        .get("script")
        .ok_or_else(|| ValidationError::StepWithoutScript(id.to_string()))?;

    Ok(Step {
        id: id.to_string(),
        name,
        script: normalize_script(id, script)?,
    })
}

/// Turn a `script` value into its list of commands.
fn normalize_script(id: &str, script: &Node) -> Result<Vec<String>, ShapeError> {
    let key = format!("{}.script", id);
    match script {
        Node::Null => Ok(Vec::new()),
        Node::Scalar(command) => Ok(vec![command.clone()]),
        Node::Sequence(items) => items
            .iter()
            .map(|item| item.as_scalar(&key).map(str::to_string))
            .collect(),
        Node::Mapping(_) => Err(ShapeError::new(
            key,
            "a string or a list of strings",
            script.kind(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(yaml: &str) -> TemplateDocument {
        TemplateDocument::from_yaml(yaml, Path::new("test.yml")).unwrap()
    }

    #[test]
    fn valid_template_converts() {
        let template = validate(&doc(
            r#"
name: Stub valid test
steps: [a, b]
a:
  name: Create readme
  script: touch README.md
b:
  name: Init git
  script:
    - git init
    - git add .
"#,
        ))
        .unwrap();

        assert_eq!(template.name, "Stub valid test");
        assert_eq!(template.steps.len(), 2);
        assert_eq!(template.steps[0].script, vec!["touch README.md"]);
        assert_eq!(template.steps[1].script, vec!["git init", "git add ."]);
    }

    #[test]
    fn steps_keep_declaration_order() {
        let template = validate(&doc(
            r#"
name: t
steps: [zeta, alpha]
alpha: {name: A, script: a}
zeta: {name: Z, script: z}
"#,
        ))
        .unwrap();

        let ids: Vec<_> = template.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_name_fails() {
        let err = validate(&doc("name: ''\nsteps: [x]")).unwrap_err();
        assert_eq!(err, ValidationError::NoName);
        assert_eq!(err.to_string(), "no name defined");
    }

    #[test]
    fn missing_name_fails() {
        let err = validate(&doc("steps: [x]")).unwrap_err();
        assert_eq!(err, ValidationError::NoName);
    }

    #[test]
    fn empty_steps_fail() {
        let err = validate(&doc("name: t\nsteps: []")).unwrap_err();
        assert_eq!(err, ValidationError::NoSteps);
        assert_eq!(err.to_string(), "no steps defined");
    }

    #[test]
    fn scalar_steps_fail() {
        let err = validate(&doc("name: t\nsteps: x")).unwrap_err();
        assert_eq!(err, ValidationError::NoSteps);
    }

    #[test]
    fn missing_steps_fail() {
        let err = validate(&doc("name: t")).unwrap_err();
        assert_eq!(err, ValidationError::NoSteps);
    }

    #[test]
    fn undefined_step_fails() {
        let err = validate(&doc("name: t\nsteps: [x]")).unwrap_err();
        assert_eq!(err.to_string(), "step x does not exist");
    }

    #[test]
    fn step_without_name_fails() {
        let err = validate(&doc("name: t\nsteps: [x]\nx:\n  script: ls")).unwrap_err();
        assert_eq!(err.to_string(), "no name set for step x");
    }

    #[test]
    fn step_without_script_fails() {
        let err = validate(&doc("name: t\nsteps: [x]\nx:\n  name: List")).unwrap_err();
        assert_eq!(err.to_string(), "no script set for step x");
    }

    #[test]
    fn empty_step_definition_reports_missing_name() {
        let err = validate(&doc("name: t\nsteps: [x]\nx:")).unwrap_err();
        assert_eq!(err, ValidationError::StepWithoutName("x".into()));
    }

    #[test]
    fn scalar_step_definition_is_a_shape_error() {
        let err = validate(&doc("name: t\nsteps: [x]\nx: ls")).unwrap_err();
        assert!(matches!(err, ValidationError::Shape(_)));
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn mapping_script_is_a_shape_error() {
        let err =
            validate(&doc("name: t\nsteps: [x]\nx:\n  name: X\n  script:\n    run: ls")).unwrap_err();
        assert!(err.to_string().contains("x.script"));
    }

    #[test]
    fn nested_list_in_script_is_a_shape_error() {
        let err =
            validate(&doc("name: t\nsteps: [x]\nx:\n  name: X\n  script:\n    - [ls]")).unwrap_err();
        assert!(matches!(err, ValidationError::Shape(_)));
    }

    #[test]
    fn non_scalar_step_id_is_a_shape_error() {
        let err = validate(&doc("name: t\nsteps:\n  - [x]")).unwrap_err();
        assert!(matches!(err, ValidationError::Shape(_)));
    }

    #[test]
    fn numeric_script_is_accepted() {
        let template = validate(&doc("name: t\nsteps: [x]\nx:\n  name: X\n  script: 42")).unwrap();
        assert_eq!(template.steps[0].script, vec!["42"]);
    }

    #[test]
    fn first_failing_step_is_reported() {
        let err = validate(&doc(
            "name: t\nsteps: [a, b]\na:\n  name: A\nb:\n  script: ls",
        ))
        .unwrap_err();
        assert_eq!(err, ValidationError::StepWithoutScript("a".into()));
    }
}
