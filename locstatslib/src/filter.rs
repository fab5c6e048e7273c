//! File filtering and discovery.
//!
//! A file is picked up when its path ends with the configured extension. This
//! is a literal suffix match on the path text: `.rb` matches `app.rb` but not
//! `app.rby`. Glob include/exclude patterns can narrow the selection further.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::warn;
use walkdir::WalkDir;

use crate::error::LocStatsError;
use crate::Result;

/// Extension matched when none is configured.
pub const DEFAULT_EXTENSION: &str = ".rb";

/// Configuration for file filtering.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Path suffix a file must end with
    pub extension: String,
    /// Glob patterns to include (if empty, include every matching file)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Create a filter matching every `.rb` file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match files ending with `extension` instead of `.rb`.
    pub fn extension(mut self, extension: &str) -> Result<Self> {
        if extension.is_empty() {
            return Err(LocStatsError::InvalidExtension);
        }
        self.extension = extension.to_string();
        Ok(self)
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It ends with the configured extension
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if !path_str.ends_with(&self.extension) {
            return false;
        }

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| LocStatsError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Discover matching entries under `root`.
///
/// Every walked entry is checked against the filter by name, directories
/// included: a `vendor.rb/` directory is returned like a file and fails later
/// while being read. A symlink is picked up even when it points nowhere.
/// Entries the walk cannot read are logged and skipped. A missing root yields
/// nothing, unless the root path itself matches. The result is sorted.
pub fn discover_files(
    root: impl AsRef<Path>,
    filter: &FilterConfig,
    follow_links: bool,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if let Err(e) = root.symlink_metadata() {
        warn!("cannot walk {}: {}", root.display(), e);
        if filter.matches(root) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if filter.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    Ok(files)
}
