// src/store/jsonl.rs
// =============================================================================
// Results file: one JSON object per line, appended as pages are visited.
//
// Why JSON lines?
// - Appending a record never rewrites earlier ones
// - A crawl that dies halfway leaves every finished page on disk
// - Easy to inspect with standard tools (grep, jq, ...)
// =============================================================================

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::metric::{PageMetric, ResultSink};
use crate::error::StoreError;

/// File name used when none is given on the command line
pub const DEFAULT_RESULTS_FILE: &str = "results.jsonl";

/// Append-only JSON-lines file of page metrics.
#[derive(Debug)]
pub struct JsonLinesStore {
    path: PathBuf,
    file: File,
    written: usize,
}

impl JsonLinesStore {
    /// Opens `path` for appending, creating the file and its parent
    /// directories if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records saved through this handle
    pub fn written(&self) -> usize {
        self.written
    }

    /// Reads every record in `path`, in file order.
    ///
    /// A missing file holds no records. Blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<PageMetric>, StoreError> {
        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut metrics = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let metric = serde_json::from_str(&line).map_err(|source| {
                StoreError::Serialization {
                    line: index + 1,
                    source,
                }
            })?;
            metrics.push(metric);
        }

        Ok(metrics)
    }
}

impl ResultSink for JsonLinesStore {
    fn save(&mut self, metric: PageMetric) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&metric)?;
        line.push('\n');

        // One write per record so a record is either fully there or not at all
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        self.written += 1;

        debug!(url = %metric.url, path = %self.path.display(), "page metric saved");
        Ok(())
    }
}
