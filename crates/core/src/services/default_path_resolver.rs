//! Default path resolver implementation
//!
//! Provides standard file system based path resolution.

use crate::interfaces::PathResolver;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Default implementation of PathResolver using std::fs
#[derive(Debug, Clone, Default)]
pub struct FsPathResolver {
    working_dir: Option<PathBuf>,
}

impl FsPathResolver {
    /// Resolve relative paths against the process working directory
    pub fn new() -> Self {
        Self { working_dir: None }
    }

    /// Resolve relative paths against `dir` instead of the process working directory
    pub fn with_working_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

impl PathResolver for FsPathResolver {
    fn current_dir(&self) -> io::Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }

    fn full_path(&self, path: &Path) -> io::Result<PathBuf> {
        if path.is_absolute() {
            Ok(normalize(path))
        } else {
            Ok(normalize(&self.current_dir()?.join(path)))
        }
    }

    fn is_file(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Lexically remove `.` and `..` components without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                // `..` never climbs above the root
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            Component::CurDir => {
                // Skip
            }
            c => {
                components.push(c);
            }
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/data/./sub/../a.csv")),
            PathBuf::from("/data/a.csv")
        );
        assert_eq!(normalize(Path::new("/../a.csv")), PathBuf::from("/a.csv"));
    }

    #[test]
    fn test_full_path_uses_pinned_working_dir() {
        let resolver = FsPathResolver::with_working_dir("/srv/run");
        assert_eq!(
            resolver.full_path(Path::new("data/../a.csv")).unwrap(),
            PathBuf::from("/srv/run/a.csv")
        );
        assert_eq!(
            resolver.full_path(Path::new("/abs/b.csv")).unwrap(),
            PathBuf::from("/abs/b.csv")
        );
    }

    #[test]
    fn test_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        std::fs::write(&file, "x,y\n").unwrap();

        let resolver = FsPathResolver::new();
        assert!(resolver.is_file(&file).unwrap());
        assert!(!resolver.is_file(temp_dir.path()).unwrap());
        assert!(!resolver.is_file(&temp_dir.path().join("missing.csv")).unwrap());
        // a regular file used as a directory is simply not found
        assert!(!resolver.is_file(&file.join("nested.csv")).unwrap());
    }
}
