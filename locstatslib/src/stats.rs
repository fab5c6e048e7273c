//! Core data structures for LOC statistics.
//!
//! Two layers:
//!
//! - [`Counts`]: code, comment and void (blank) line totals for one file or bucket
//! - [`Buckets`]: the aggregate map from bucket name to its [`Counts`]
//!
//! Counts only ever grow. A bucket is created the first time a file lands in it
//! and is read once at the end for output.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::classify::LineKind;

/// Line counts for a file or a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Lines of code
    pub code: u64,
    /// Comment lines (`#`)
    pub comment: u64,
    /// Blank lines (spaces and tabs only)
    pub void: u64,
}

impl Counts {
    /// Create a new Counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one line of the given kind.
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.void += 1,
        }
    }

    /// Total lines counted.
    pub fn total(&self) -> u64 {
        self.code + self.comment + self.void
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comment: self.comment + other.comment,
            void: self.void + other.void,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.void += other.void;
    }
}

/// Aggregated counts keyed by bucket name.
///
/// This is the accumulator handed to [`count_into`](crate::count_into). Keys are
/// kept ordered, so rendered output is sorted by bucket name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    inner: BTreeMap<String, Counts>,
}

impl Buckets {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's counts to a bucket, creating the bucket on first use.
    pub fn add(&mut self, key: impl Into<String>, counts: Counts) {
        *self.inner.entry(key.into()).or_default() += counts;
    }

    /// Counts for a bucket, if any file landed in it.
    pub fn get(&self, key: &str) -> Option<&Counts> {
        self.inner.get(key)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// One printable summary line per bucket, in key order.
    pub fn lines(&self) -> impl Iterator<Item = BucketLine<'_>> {
        self.inner
            .iter()
            .map(|(name, counts)| BucketLine { name, counts })
    }
}

/// A bucket summary line: `<bucket>: loc=<code> comments=<comment> void=<void>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketLine<'a> {
    pub name: &'a str,
    pub counts: &'a Counts,
}

impl fmt::Display for BucketLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: loc={} comments={} void={}",
            self.name, self.counts.code, self.counts.comment, self.counts.void
        )
    }
}
