//! # locstatslib
//!
//! A lines of code counter library for hash-commented sources (Ruby by default)
//! that reports code, comment, and blank line totals per top-level directory.
//!
//! ## Overview
//!
//! Every line of every matching file is classified as one of:
//!
//! - **Code**: anything that is neither a comment nor blank
//! - **Comment**: a line whose first non-indent character is `#`
//! - **Blank** ("void"): a line made only of spaces and tabs
//!
//! Counts are aggregated into *buckets*: the first path segment of each file
//! relative to the scanned root. `src/lib/a.rb` scanned from `src` lands in
//! bucket `lib`; a file sitting directly in the root is its own bucket.
//!
//! ## Example
//!
//! ```rust
//! use locstatslib::{classify, count_directory, CountOptions, LineKind};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! assert_eq!(classify("  # note"), LineKind::Comment);
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("models")).unwrap();
//! fs::write(dir.path().join("models/user.rb"), "# User\nclass User\nend\n").unwrap();
//!
//! let buckets = count_directory(dir.path(), &CountOptions::new()).unwrap();
//! let models = buckets.get("models").unwrap();
//! assert_eq!(models.code, 2);
//! assert_eq!(models.comment, 1);
//! ```

pub mod classify;
pub mod counter;
pub mod error;
pub mod filter;
pub mod stats;

pub use classify::{classify, count_file, scan_reader, LineKind, ScanOutcome};
pub use counter::{bucket_key, count_directory, count_into, CountOptions};
pub use error::LocStatsError;
pub use filter::{discover_files, FilterConfig, DEFAULT_EXTENSION};
pub use stats::{BucketLine, Buckets, Counts};

/// Result type for locstatslib operations
pub type Result<T> = std::result::Result<T, LocStatsError>;
