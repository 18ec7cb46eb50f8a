//! Directory argument handling shared by `setup` and `remove`.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BoilerError, Result};

/// Resolve the single optional directory argument to a canonical path.
///
/// No argument means `working_dir`. Relative paths are taken relative to
/// `working_dir`. Symlinks are resolved.
pub fn resolve_directory(args: &[PathBuf], working_dir: &Path) -> Result<PathBuf> {
    let raw = match args {
        [] => working_dir.to_path_buf(),
        [dir] => working_dir.join(dir),
        _ => return Err(BoilerError::MultipleDirectories),
    };

    match raw.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        Ok(path) => Err(BoilerError::DirectoryNotFound { path }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(BoilerError::DirectoryNotFound { path: raw })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_working_dir() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_directory(&[], temp.path()).unwrap();
        assert_eq!(resolved, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn relative_paths_use_working_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("templates")).unwrap();

        let resolved = resolve_directory(&[PathBuf::from("templates")], temp.path()).unwrap();
        assert_eq!(
            resolved,
            temp.path().join("templates").canonicalize().unwrap()
        );
    }

    #[test]
    fn dot_segments_are_normalized() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("a")).unwrap();

        let resolved = resolve_directory(&[PathBuf::from("a/../a/.")], temp.path()).unwrap();
        assert_eq!(resolved, temp.path().join("a").canonicalize().unwrap());
    }

    #[test]
    fn more_than_one_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = resolve_directory(&[PathBuf::from("a"), PathBuf::from("b")], temp.path())
            .unwrap_err();
        assert_eq!(err.to_string(), "Only one directory is allowed");
    }

    #[test]
    fn missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = resolve_directory(&[PathBuf::from("nope")], temp.path()).unwrap_err();
        assert_eq!(err.to_string(), "Directory does not exist");
    }

    #[test]
    fn file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("file"), "").unwrap();
        let err = resolve_directory(&[PathBuf::from("file")], temp.path()).unwrap_err();
        assert!(matches!(err, BoilerError::DirectoryNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_resolved() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        std::fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, temp.path().join("link")).unwrap();

        let resolved = resolve_directory(&[PathBuf::from("link")], temp.path()).unwrap();
        assert_eq!(resolved, real.canonicalize().unwrap());
    }
}
