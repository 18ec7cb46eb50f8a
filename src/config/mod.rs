//! User configuration.
//!
//! The only persisted state is the list of template search paths, kept in
//! `~/.config/boiler/configuration.json` unless overridden with `--config`
//! or `BOILER_CONFIG`.
//!
//! # Example
//!
//! ```
//! use boiler::config::{Configuration, PathRegistry};
//! use std::path::Path;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let file = temp.path().join("configuration.json");
//!
//! let mut config = Configuration::load(&file).unwrap();
//! assert!(config.add_path(Path::new("/templates")));
//! config.save().unwrap();
//!
//! let reloaded = Configuration::load(&file).unwrap();
//! assert_eq!(reloaded.list_paths().len(), 1);
//! ```

pub mod registry;

use std::path::PathBuf;

pub use registry::{Configuration, PathRegistry};

/// Default location of the configuration file.
///
/// Falls back to a relative `.config/boiler/configuration.json` when the home
/// directory cannot be determined.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("boiler")
        .join("configuration.json")
}
