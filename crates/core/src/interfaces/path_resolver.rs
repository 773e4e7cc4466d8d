//! Path resolution interface
//!
//! Abstracts the few filesystem operations the data source fixup needs so
//! the working directory can be pinned and the filesystem substituted.

use std::io;
use std::path::{Path, PathBuf};

/// Trait for path resolution operations
pub trait PathResolver: Send + Sync {
    /// Directory relative paths are resolved against
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Absolute, normalized form of `path` (relative paths are taken
    /// against [`PathResolver::current_dir`])
    fn full_path(&self, path: &Path) -> io::Result<PathBuf>;

    /// Whether `path` names an existing regular file.
    ///
    /// A missing path is `Ok(false)`; any other failure is returned.
    fn is_file(&self, path: &Path) -> io::Result<bool>;
}
