//! Line classification for hash-commented source files.
//!
//! A line is inspected only after its leading indentation (spaces and tabs) is
//! removed. Trailing whitespace is never looked at, and there is no notion of
//! block comments: every line stands on its own.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::error::LocStatsError;
use crate::stats::Counts;
use crate::Result;

/// The category of a single line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Anything that is neither a comment nor blank
    Code,
    /// First non-indent character is `#`
    Comment,
    /// Nothing left after removing spaces and tabs
    Blank,
}

/// Classify one line of text (without its line terminator).
///
/// # Example
///
/// ```rust
/// use locstatslib::{classify, LineKind};
///
/// assert_eq!(classify(""), LineKind::Blank);
/// assert_eq!(classify(" \t "), LineKind::Blank);
/// assert_eq!(classify("  # x"), LineKind::Comment);
/// assert_eq!(classify("   x = 1  "), LineKind::Code);
/// ```
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start_matches([' ', '\t']);
    if trimmed.starts_with('#') {
        LineKind::Comment
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Code
    }
}

/// Result of scanning a stream.
///
/// `error` is set when the stream failed part way through. `counts` then holds
/// every line read before the failure.
#[derive(Debug)]
pub struct ScanOutcome {
    pub counts: Counts,
    pub error: Option<io::Error>,
}

/// Scan any reader line by line and count each line's kind.
///
/// Lines are split on `\n`; a `\r` right before it is dropped. A last line
/// without a terminator still counts. Bytes that are not valid UTF-8 are
/// tolerated since only the leading characters decide the kind.
pub fn scan_reader<R: Read>(reader: R) -> ScanOutcome {
    let mut reader = BufReader::new(reader);
    let mut counts = Counts::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = strip_line_ending(&buf);
                counts.record(classify(&String::from_utf8_lossy(line)));
            }
            Err(e) => {
                return ScanOutcome {
                    counts,
                    error: Some(e),
                }
            }
        }
    }

    ScanOutcome {
        counts,
        error: None,
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Count the lines of a single file.
///
/// Failing to open the file is an error. A read failure after the file is open
/// is logged as a warning and the lines read up to that point are returned.
///
/// # Example
///
/// ```rust
/// use locstatslib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("app.rb");
/// fs::write(&path, "# App\n\nputs 'hi'\n").unwrap();
///
/// let counts = count_file(&path).unwrap();
/// assert_eq!((counts.code, counts.comment, counts.void), (1, 1, 1));
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<Counts> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LocStatsError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let outcome = scan_reader(file);
    if let Some(err) = outcome.error {
        warn!("reading {}: {}", path.display(), err);
    }
    debug!(
        "{}: {} lines, code={} comment={} void={}",
        path.display(),
        outcome.counts.total(),
        outcome.counts.code,
        outcome.counts.comment,
        outcome.counts.void
    );

    Ok(outcome.counts)
}
