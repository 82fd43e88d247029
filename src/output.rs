//! Persists the enriched record as a JSON snapshot on disk.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use jiff::civil::Date;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

#[derive(Serialize, Debug)]
pub struct RequestMeta {
    #[serde(rename = "from")]
    pub base: String,
    #[serde(rename = "to")]
    pub target: String,
    pub date: Date,
    pub saved_at: Timestamp,
}

/// One fetched rate together with the request that produced it. Built fresh
/// each run and written exactly once.
#[derive(Serialize, Debug)]
pub struct RateRecord {
    pub request: RequestMeta,
    pub response: Value,
}

impl RateRecord {
    pub fn new(
        base: impl Into<String>,
        target: impl Into<String>,
        date: Date,
        response: Value,
    ) -> Self {
        Self {
            request: RequestMeta {
                base: base.into(),
                target: target.into(),
                date,
                saved_at: Timestamp::now(),
            },
            response,
        }
    }
}

/// Writes rate snapshots under `<root>/data/`.
pub struct ResultWriter {
    root: PathBuf,
}

impl ResultWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the record as pretty-printed JSON and return the path relative
    /// to the project root. The same (base, target, date) triple always maps
    /// to the same file, so a rerun overwrites the previous snapshot.
    pub fn write(&self, record: &RateRecord) -> Result<PathBuf> {
        let dir = self.root.join("data");
        fs::create_dir_all(&dir)?;

        let filename = format!(
            "rate_{}_{}_{}.json",
            record.request.base, record.request.target, record.request.date
        );
        let path = dir.join(filename);
        fs::write(&path, serde_json::to_string_pretty(record)?)?;

        Ok(relative_to(&path, &self.root))
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
