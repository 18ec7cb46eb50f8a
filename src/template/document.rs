//! Parsed template documents.
//!
//! A template file is loaded into a [`TemplateDocument`]: an open,
//! string-keyed mapping of [`Node`] values. Nothing is assumed about its
//! structure until [`validate`](super::validate) turns it into a typed
//! [`Template`](super::Template); until then every access goes through the
//! typed accessors on [`Node`], which fail with a [`ShapeError`] instead of
//! coercing.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

use crate::error::{BoilerError, Result};

/// Mapping node contents, keyed by the stringified YAML key.
pub type Mapping = BTreeMap<String, Node>;

/// A value inside a template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `~`, `null` or an absent value (`key:`).
    Null,
    /// Strings, numbers and booleans, kept in their textual form.
    Scalar(String),
    /// An ordered list.
    Sequence(Vec<Node>),
    /// A nested mapping.
    Mapping(Mapping),
}

/// A node did not have the shape the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{key}` must be {expected}, found {found}")]
pub struct ShapeError {
    /// Dotted location of the offending node (e.g. `install.script`).
    pub key: String,
    /// What the caller wanted.
    pub expected: &'static str,
    /// What the document contained.
    pub found: &'static str,
}

impl ShapeError {
    /// Create a shape error for `key`.
    pub fn new(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            key: key.into(),
            expected,
            found,
        }
    }
}

impl Node {
    /// Human-readable name of this node's kind, used in [`ShapeError`]s.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "a scalar",
            Node::Sequence(_) => "a sequence",
            Node::Mapping(_) => "a mapping",
        }
    }

    /// True for null, the empty string, and empty collections.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Scalar(s) => s.is_empty(),
            Node::Sequence(items) => items.is_empty(),
            Node::Mapping(map) => map.is_empty(),
        }
    }

    /// Borrow the scalar text of this node.
    pub fn as_scalar(&self, key: &str) -> std::result::Result<&str, ShapeError> {
        match self {
            Node::Scalar(s) => Ok(s),
            other => Err(ShapeError::new(key, "a scalar", other.kind())),
        }
    }

    /// Borrow the items of a sequence node.
    pub fn as_sequence(&self, key: &str) -> std::result::Result<&[Node], ShapeError> {
        match self {
            Node::Sequence(items) => Ok(items),
            other => Err(ShapeError::new(key, "a sequence", other.kind())),
        }
    }

    /// Borrow the entries of a mapping node.
    pub fn as_mapping(&self, key: &str) -> std::result::Result<&Mapping, ShapeError> {
        match self {
            Node::Mapping(map) => Ok(map),
            other => Err(ShapeError::new(key, "a mapping", other.kind())),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Number(n) => Node::Scalar(n.to_string()),
            Value::String(s) => Node::Scalar(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => {
                let mut entries = Mapping::new();
                for (key, value) in map {
                    match key_to_string(&key) {
                        Some(key) => {
                            entries.insert(key, Node::from(value));
                        }
                        None => tracing::debug!("Ignoring non-scalar mapping key {:?}", key),
                    }
                }
                Node::Mapping(entries)
            }
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => key_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "~"),
            Node::Scalar(s) => write!(f, "{}", s),
            Node::Sequence(items) => {
                let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            Node::Mapping(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// Read and parse a YAML file into a [`Node`] without any shape checks.
pub fn load_node(path: &Path) -> Result<Node> {
    let content = read_source(path)?;
    parse_node(&content, path)
}

/// Read a template file as text. Content that is not UTF-8 is a parse error.
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => BoilerError::TemplateParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        _ => BoilerError::Io(e),
    })
}

/// Parse YAML text into a [`Node`].
///
/// An empty document parses to [`Node::Null`].
pub fn parse_node(content: &str, source_path: &Path) -> Result<Node> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| BoilerError::TemplateParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(Node::from(value))
}

/// A template definition as read from disk, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    path: PathBuf,
    root: Mapping,
}

impl TemplateDocument {
    /// Load a template document from a file.
    ///
    /// # Errors
    ///
    /// Returns `TemplateParseError` if the YAML is malformed and
    /// `TemplateNotMapping` if it parses to anything but a mapping.
    pub fn parse(path: &Path) -> Result<Self> {
        let content = read_source(path)?;
        Self::from_yaml(&content, path)
    }

    /// Build a document from YAML text; `path` is used for error reporting.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        match parse_node(content, path)? {
            Node::Mapping(root) => Ok(Self {
                path: path.to_path_buf(),
                root,
            }),
            _ => Err(BoilerError::TemplateNotMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Build a document from an already parsed mapping.
    pub fn from_mapping(path: impl Into<PathBuf>, root: Mapping) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// File the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Check whether a top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Insert `node` under `key` unless the key is already present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert_missing(&mut self, key: &str, node: Node) -> bool {
        if self.root.contains_key(key) {
            return false;
        }
        self.root.insert(key.to_string(), node);
        true
    }

    /// Iterate over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(|k| k.as_str())
    }

    /// Borrow the whole top-level mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }
}
