//! The persisted list of template search paths.
//!
//! Stored as pretty-printed JSON:
//!
//! ```json
//! {
//!   "paths": [
//!     "/home/me/templates"
//!   ]
//! }
//! ```
//!
//! Older files keyed the list by index (`{"paths": {"0": "/a"}}`); that form
//! is still read and is rewritten as an array on the next save.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{BoilerError, Result};

/// Ordered, duplicate-free set of template search paths.
///
/// Mutations only touch memory until [`save`](PathRegistry::save) is called.
pub trait PathRegistry {
    /// Registered paths, in registration order.
    fn list_paths(&self) -> &[PathBuf];

    /// Append `path`. Returns false if it is already registered.
    fn add_path(&mut self, path: &Path) -> bool;

    /// Remove `path`. Returns false if it was not registered.
    fn remove_path(&mut self, path: &Path) -> bool;

    /// Persist the current paths.
    fn save(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigurationFile {
    #[serde(default)]
    paths: StoredPaths,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredPaths {
    List(Vec<PathBuf>),
    Indexed(BTreeMap<String, PathBuf>),
}

impl Default for StoredPaths {
    fn default() -> Self {
        StoredPaths::List(Vec::new())
    }
}

impl StoredPaths {
    fn into_list(self) -> Vec<PathBuf> {
        match self {
            StoredPaths::List(paths) => paths,
            StoredPaths::Indexed(map) => {
                let mut entries: Vec<(String, PathBuf)> = map.into_iter().collect();
                entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
                entries.into_iter().map(|(_, path)| path).collect()
            }
        }
    }
}

/// The configuration file and the paths it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    path: PathBuf,
    paths: Vec<PathBuf>,
}

impl Configuration {
    /// An empty configuration that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            paths: Vec::new(),
        }
    }

    /// Load the configuration at `path`.
    ///
    /// A missing file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the file is not a JSON object with an
    /// optional `paths` list.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("No configuration at {}, starting empty", path.display());
            return Ok(Self::new(path));
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;

        let file: ConfigurationFile = if content.trim().is_empty() {
            ConfigurationFile::default()
        } else {
            serde_json::from_str(&content).map_err(|e| BoilerError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?
        };

        let mut config = Self::new(path);
        for p in file.paths.into_list() {
            config.add_path(&p);
        }

        tracing::debug!(
            "Loaded {} search paths from {}",
            config.paths.len(),
            config.path.display()
        );
        Ok(config)
    }

    /// Location of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PathRegistry for Configuration {
    fn list_paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn add_path(&mut self, path: &Path) -> bool {
        if self.paths.iter().any(|p| p == path) {
            return false;
        }
        self.paths.push(path.to_path_buf());
        true
    }

    fn remove_path(&mut self, path: &Path) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p != path);
        self.paths.len() != before
    }

    /// Write to a temp file next to the target, then rename it into place.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = ConfigurationFile {
            paths: StoredPaths::List(self.paths.clone()),
        };
        let content = serde_json::to_string_pretty(&file)
            .context("Failed to serialize configuration")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        tracing::debug!("Saved {} search paths to {}", self.paths.len(), self.path.display());
        Ok(())
    }
}
