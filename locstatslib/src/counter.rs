//! High-level LOC counting API.
//!
//! Walks a directory tree, counts every matching file and folds the results into
//! per-bucket totals. The bucket of a file is the first segment of its path
//! relative to the scanned root.

use std::path::{Component, Path};

use log::debug;

use crate::classify::count_file;
use crate::filter::{discover_files, FilterConfig};
use crate::stats::Buckets;
use crate::Result;

/// Options for counting LOC.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Set the path suffix files must end with.
    pub fn extension(mut self, extension: &str) -> Result<Self> {
        self.file_filter = self.file_filter.extension(extension)?;
        Ok(self)
    }

    /// Follow symbolic links while walking.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Compute the bucket a file belongs to.
///
/// - `root/lib/a.rb` → `lib`
/// - `root/a.rb` → `a.rb`
/// - a file scanned as the root itself → its file name
///
/// # Example
///
/// ```rust
/// use locstatslib::bucket_key;
/// use std::path::Path;
///
/// assert_eq!(bucket_key(Path::new("src/lib/a.rb"), Path::new("src")), "lib");
/// assert_eq!(bucket_key(Path::new("src/a.rb"), Path::new("src")), "a.rb");
/// ```
pub fn bucket_key(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .find_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Count every matching file under `root` into an existing accumulator.
///
/// The first file that cannot be opened aborts the walk with
/// [`LocStatsError::FileOpen`](crate::LocStatsError::FileOpen). Counts already
/// added to `buckets` stay there; callers that must not report partial results
/// should discard it.
pub fn count_into(
    root: impl AsRef<Path>,
    options: &CountOptions,
    buckets: &mut Buckets,
) -> Result<()> {
    let root = root.as_ref();
    let files = discover_files(root, &options.file_filter, options.follow_links)?;
    debug!("{} matching files under {}", files.len(), root.display());

    for file_path in files {
        let counts = count_file(&file_path)?;
        buckets.add(bucket_key(&file_path, root), counts);
    }

    Ok(())
}

/// Count LOC per bucket in a directory.
///
/// A root that does not exist counts as an empty tree.
///
/// # Example
///
/// ```rust
/// use locstatslib::{count_directory, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("sub")).unwrap();
/// fs::write(dir.path().join("a.rb"), "x = 1\ny = 2\n# c\n\n").unwrap();
/// fs::write(dir.path().join("sub/b.rb"), "a\nb\nc\n").unwrap();
///
/// let buckets = count_directory(dir.path(), &CountOptions::new()).unwrap();
/// let lines: Vec<String> = buckets.lines().map(|l| l.to_string()).collect();
/// assert_eq!(lines, vec![
///     "a.rb: loc=2 comments=1 void=1",
///     "sub: loc=3 comments=0 void=0",
/// ]);
/// ```
pub fn count_directory(root: impl AsRef<Path>, options: &CountOptions) -> Result<Buckets> {
    let mut buckets = Buckets::new();
    count_into(root, options, &mut buckets)?;
    Ok(buckets)
}
