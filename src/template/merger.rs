//! Include merging.
//!
//! A template may list other templates under `include`. Each one is located
//! through the same search paths and its top-level keys are folded into the
//! primary document before validation.
//!
//! # Merge Rules
//!
//! - The merge is shallow: whole top-level values are taken, never combined
//! - The primary document always wins; an include only fills in absent keys
//! - Among includes, the one listed first wins
//! - Includes are not followed recursively
//!
//! So an include can contribute shared step definitions but can never
//! replace the primary's `name`, `steps`, or a step it defines itself.

use super::document::{load_node, Node, TemplateDocument};
use super::locator::TemplateLocator;
use super::validator::ValidationError;

/// Fold every included template into `doc`.
///
/// Returns `doc` unchanged when it has no `include` key.
pub fn merge_includes(
    mut doc: TemplateDocument,
    locator: &TemplateLocator<'_>,
) -> Result<TemplateDocument, ValidationError> {
    let names = match doc.get("include") {
        None => return Ok(doc),
        Some(Node::Sequence(items)) => items
            .iter()
            .map(|item| item.as_scalar("include").map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ValidationError::IncludeNotSequence),
    };

    for name in names {
        let included = load_include(&name, locator)?;
        let mut contributed = 0;
        for (key, value) in included {
            if doc.insert_missing(&key, value) {
                contributed += 1;
            }
        }
        tracing::debug!("Include {} contributed {} key(s)", name, contributed);
    }

    Ok(doc)
}

fn load_include(
    name: &str,
    locator: &TemplateLocator<'_>,
) -> Result<super::document::Mapping, ValidationError> {
    let path = locator
        .find(name)
        .ok_or_else(|| ValidationError::IncludeNotFound(name.to_string()))?;

    tracing::debug!("Loading include {} from {}", name, path.display());

    match load_node(&path) {
        Ok(Node::Mapping(map)) if !map.is_empty() => Ok(map),
        Ok(_) => Err(ValidationError::IncludeUnparsable(name.to_string())),
        Err(e) => {
            tracing::debug!("Include {} failed to load: {}", name, e);
            Err(ValidationError::IncludeUnparsable(name.to_string()))
        }
    }
}
