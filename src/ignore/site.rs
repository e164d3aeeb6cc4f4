// src/ignore/site.rs

//! Base ignore-path computation for a static site.
//!
//! Produces anchored prefix patterns for the site's config files, its output
//! directory and its `exclude` entries, followed by the generator's metadata
//! file. Only paths that exist inside the source are turned into patterns.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SiteOptions;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::ignore::extend::IgnorePathSource;
use crate::ignore::path_utils::{normalize, relative_str, sanitized_path};
use crate::ignore::pattern::IgnorePattern;

/// Incremental-build metadata file the generator writes into the source.
pub const METADATA_FILE: &str = ".jekyll-metadata";

/// [`IgnorePathSource`] for [`SiteOptions`], backed by a [`FileSystem`].
#[derive(Debug, Clone, Default)]
pub struct SiteIgnorePaths<F = RealFileSystem> {
    fs: F,
}

impl SiteIgnorePaths<RealFileSystem> {
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl<F: FileSystem> SiteIgnorePaths<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Turn one candidate into a prefix pattern, or `None` when it does not
    /// exist or lies outside (or at) the source.
    fn pattern_for(&self, source: &Path, path: &Path) -> Result<Option<IgnorePattern>> {
        if !self.fs.exists(path) {
            debug!(?path, "not ignoring missing path");
            return Ok(None);
        }

        let rel = match relative_str(source, path) {
            Some(rel) if !rel.is_empty() => rel,
            _ => {
                debug!(?path, ?source, "not ignoring path outside the source");
                return Ok(None);
            }
        };

        let rel = if self.fs.is_dir(path) {
            format!("{rel}/")
        } else {
            rel
        };

        let pattern = IgnorePattern::prefix(&rel)?;
        debug!(%pattern, "ignoring");
        Ok(Some(pattern))
    }
}

impl<F: FileSystem> IgnorePathSource<SiteOptions> for SiteIgnorePaths<F> {
    fn listen_ignore_paths(&self, options: &SiteOptions) -> Result<Vec<IgnorePattern>> {
        // A source that cannot be resolved has nothing to ignore in it.
        let source = self.fs.canonicalize(&options.source)?;

        let mut patterns = Vec::new();
        for candidate in candidate_paths(&source, options) {
            if let Some(pattern) = self.pattern_for(&source, &candidate)? {
                patterns.push(pattern);
            }
        }

        patterns.push(IgnorePattern::prefix(METADATA_FILE)?);
        Ok(patterns)
    }
}

/// Absolute candidate paths, in the order patterns are emitted.
fn candidate_paths(source: &Path, options: &SiteOptions) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(options.config_files.len() + options.exclude.len() + 1);

    paths.extend(
        options
            .config_files
            .iter()
            .map(|f| sanitized_path(source, Path::new(f))),
    );

    let destination = if options.destination.is_absolute() {
        normalize(&options.destination)
    } else {
        normalize(&source.join(&options.destination))
    };
    paths.push(destination);

    paths.extend(
        options
            .exclude
            .iter()
            .map(|e| sanitized_path(source, Path::new(e))),
    );

    paths
}
