//! Template lookup across the registered search paths.

use std::path::{Path, PathBuf};

/// File extension of template definitions.
pub const TEMPLATE_EXTENSION: &str = "yml";

/// Finds template definition files by name.
///
/// For every search path, in order, two locations are probed:
///
/// 1. `<path>/<name>/<name>.yml` (the template's own directory)
/// 2. `<path>/<name>.yml`
///
/// The first existing file wins. Only those exact locations are checked;
/// nested directories are never searched.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLocator<'a> {
    search_paths: &'a [PathBuf],
}

impl<'a> TemplateLocator<'a> {
    /// Create a locator over the given search paths.
    pub fn new(search_paths: &'a [PathBuf]) -> Self {
        Self { search_paths }
    }

    /// The search paths, in precedence order.
    pub fn search_paths(&self) -> &'a [PathBuf] {
        self.search_paths
    }

    /// Find the definition file for `name`.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        if !is_plain_name(name) {
            tracing::debug!("Template name {:?} is not a plain file name", name);
            return None;
        }

        let file_name = definition_file_name(name);

        for directory in self.search_paths {
            let own_dir = directory.join(name);
            if let Some(found) = probe(&own_dir, &file_name) {
                return Some(found);
            }

            if let Some(found) = probe(directory, &file_name) {
                return Some(found);
            }
        }

        tracing::debug!(
            "Template {} not found in {} search path(s)",
            name,
            self.search_paths.len()
        );
        None
    }
}

/// `<name>.yml`
pub fn definition_file_name(name: &str) -> String {
    format!("{}.{}", name, TEMPLATE_EXTENSION)
}

fn probe(directory: &Path, file_name: &str) -> Option<PathBuf> {
    if !directory.is_dir() {
        return None;
    }

    let candidate = directory.join(file_name);
    tracing::debug!("Probing {}", candidate.display());
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
