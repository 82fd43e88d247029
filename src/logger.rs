//! Append-only error log owned by the entry point.

use std::error::Error;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use jiff::Timestamp;

/// Logging is best-effort: a failure to write the log never masks the error
/// being reported.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a timestamped entry carrying the full cause chain of `err`.
    pub fn error(&self, err: &dyn Error) {
        let mut entry = format!("{} [ERROR] {err}", Timestamp::now());
        let mut cause = err.source();
        while let Some(c) = cause {
            let _ = write!(entry, "\n  caused by: {c}");
            cause = c.source();
        }
        entry.push('\n');

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = file.write_all(entry.as_bytes());
        }
    }
}
