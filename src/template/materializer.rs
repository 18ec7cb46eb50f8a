//! Copying template asset directories into a new project.
//!
//! Next to its definition file, a template may ship any number of files in
//! its own directory (`<search path>/<name>/`). These are copied into the
//! project directory with placeholders substituted in their contents.
//!
//! Unlike lookup, materialization is additive: every search path holding a
//! directory for the template contributes, in search-path order, so a later
//! path can overwrite files copied from an earlier one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::{DirEntry, WalkDir};

use super::locator::definition_file_name;
use super::variables::{substitute, VariableBindings};
use crate::error::Result;

/// What a materialization wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Asset directories that contributed, in order.
    pub sources: Vec<PathBuf>,
    /// Directories created under the destination.
    pub directories: usize,
    /// Files written under the destination.
    pub files: usize,
}

impl MaterializeReport {
    /// True if no search path had an asset directory for the template.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Copy the asset directories of `template_name` into `destination`.
///
/// Hidden files are included. The template's own definition file
/// (`<name>.yml` at the top of the asset directory) is skipped.
pub fn materialize(
    template_name: &str,
    search_paths: &[PathBuf],
    destination: &Path,
    bindings: &VariableBindings,
) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();
    let definition = definition_file_name(template_name);

    for search_path in search_paths {
        let asset_dir = search_path.join(template_name);
        if !asset_dir.is_dir() {
            continue;
        }

        tracing::debug!("Copying assets from {}", asset_dir.display());
        report.sources.push(asset_dir.clone());

        let walker = WalkDir::new(&asset_dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by(|a, b| {
                b.file_type()
                    .is_dir()
                    .cmp(&a.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to read {}", asset_dir.display()))?;

            if is_definition(&entry, &definition) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&asset_dir)
                .with_context(|| {
                    format!(
                        "{} is outside {}",
                        entry.path().display(),
                        asset_dir.display()
                    )
                })?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create {}", target.display()))?;
                report.directories += 1;
            } else if entry.file_type().is_file() {
                copy_file(entry.path(), &target, bindings)?;
                report.files += 1;
            }
        }
    }

    tracing::debug!(
        "Materialized {} files and {} directories from {} sources",
        report.files,
        report.directories,
        report.sources.len()
    );

    Ok(report)
}

fn is_definition(entry: &DirEntry, definition: &str) -> bool {
    entry.depth() == 1 && entry.file_type().is_file() && entry.file_name() == definition
}

/// Copy one file, then rewrite its contents with placeholders substituted.
///
/// Copying first keeps the source permissions (e.g. executable scripts).
/// Contents that are not UTF-8 are left byte-for-byte.
fn copy_file(source: &Path, target: &Path, bindings: &VariableBindings) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::copy(source, target).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;

    let bytes = fs::read(target).with_context(|| format!("Failed to read {}", target.display()))?;
    if let Ok(text) = String::from_utf8(bytes) {
        let replaced = substitute(&text, bindings);
        if replaced != text {
            fs::write(target, replaced)
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }
    }

    Ok(())
}
