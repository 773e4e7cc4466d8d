use crate::{
    diagnostics::extended_diagnostics_enabled,
    error::Result,
    interfaces::PathResolver,
    services::FsPathResolver,
};
use std::path::{Path, PathBuf};

/// Prefix marking a path as relative to the data directory
pub const DATA_DIRECTORY_TOKEN: &str = "|DataDirectory|\\";

/// True only for paths that start with [`DATA_DIRECTORY_TOKEN`] (ordinal match)
pub fn path_needs_fixup(path: &str) -> bool {
    !path.is_empty() && path.starts_with(DATA_DIRECTORY_TOKEN)
}

/// The part of `path` after the token.
///
/// Callers must check [`path_needs_fixup`] first.
pub fn relative_part(path: &str) -> &str {
    debug_assert!(
        path_needs_fixup(path),
        "relative_part called on a path without the data directory token: {path}"
    );
    path.get(DATA_DIRECTORY_TOKEN.len()..).unwrap_or_default()
}

/// Both separators are accepted so tokenized paths written for Windows
/// resolve on every platform.
fn split_relative(relative: &str) -> PathBuf {
    relative
        .split(['\\', '/'])
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Resolves tokenized data source paths against an ordered list of folders.
///
/// One resolver is created per connection; its search folders never change
/// afterwards. Nothing is cached: every call checks the filesystem again,
/// since files may be deployed between discovery and execution.
pub struct DataSourcePathResolver<R = FsPathResolver> {
    search_dirs: Vec<PathBuf>,
    resolver: R,
}

impl DataSourcePathResolver<FsPathResolver> {
    pub fn new<I, P>(search_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_path_resolver(search_dirs, FsPathResolver::new())
    }
}

impl<R: PathResolver> DataSourcePathResolver<R> {
    pub fn with_path_resolver<I, P>(search_dirs: I, resolver: R) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_dirs: search_dirs.into_iter().map(Into::into).collect(),
            resolver,
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// [`DataSourcePathResolver::fix_path_in`] over this resolver's own search folders
    pub fn fix_path(&self, path: &str) -> Result<Option<PathBuf>> {
        self.fix_path_in(path, self.search_dirs.as_slice())
    }

    /// Resolve a tokenized `path`.
    ///
    /// Returns `Ok(None)` when `path` carries no token and should be used as
    /// is. Otherwise the first existing file wins, probing in order:
    ///
    /// 1. the relative part under the working directory
    /// 2. the relative part under each of `search_dirs`
    ///
    /// When nothing exists, the bare file name under the working directory
    /// is returned without checking it, leaving the "not found" report to
    /// whoever opens it.
    pub fn fix_path_in<P: AsRef<Path>>(
        &self,
        path: &str,
        search_dirs: &[P],
    ) -> Result<Option<PathBuf>> {
        if !path_needs_fixup(path) {
            return Ok(None);
        }

        let relative = split_relative(relative_part(path));
        let verbose = extended_diagnostics_enabled();

        let full_path = self.resolver.full_path(&relative)?;
        if verbose {
            tracing::debug!("Probing data file in working directory: {:?}", full_path);
        }
        if self.resolver.is_file(&full_path)? {
            tracing::debug!("Resolved {} to {:?}", path, full_path);
            return Ok(Some(full_path));
        }

        for dir in search_dirs {
            let full_path = self.resolver.full_path(&dir.as_ref().join(&relative))?;
            if verbose {
                tracing::debug!("Probing data file in search folder: {:?}", full_path);
            }
            if self.resolver.is_file(&full_path)? {
                tracing::debug!("Resolved {} to {:?}", path, full_path);
                return Ok(Some(full_path));
            }
        }

        let file_name = relative.file_name().map(PathBuf::from).unwrap_or_default();
        let fallback = self.resolver.full_path(&file_name)?;
        tracing::debug!(
            "Data file for {} not found in {} folder(s), falling back to {:?}",
            path,
            search_dirs.len() + 1,
            fallback
        );
        Ok(Some(fallback))
    }
}
