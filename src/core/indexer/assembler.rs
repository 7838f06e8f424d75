//! Record numbering and export.
//!
//! The assembler is a pure enumeration pass: groups arrive in walk
//! order, records are numbered from 1, nothing is filtered, sorted or
//! deduplicated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{DocSearchError, Result};
use crate::core::types::{DocumentRecords, SearchRecord};

/// Assigns `objectID`s and accumulates the final record array
#[derive(Debug, Default)]
pub struct RecordAssembler {
    records: Vec<SearchRecord>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's records, page record first
    pub fn push(&mut self, group: DocumentRecords) {
        for draft in group {
            let object_id = self.records.len() as u64 + 1;
            self.records.push(SearchRecord::from_draft(draft, object_id));
        }
    }

    /// Number of records assembled so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finish assembly
    pub fn finish(self) -> Vec<SearchRecord> {
        self.records
    }

    /// Number a full sequence of groups in one pass
    pub fn assemble(groups: impl IntoIterator<Item = DocumentRecords>) -> Vec<SearchRecord> {
        let mut assembler = Self::new();
        for group in groups {
            assembler.push(group);
        }
        assembler.finish()
    }
}

/// Pretty-printed JSON for a record array (2-space indent)
pub fn to_json(records: &[SearchRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write `records` to `path`, replacing any previous artifact.
///
/// The JSON is written to a sibling temporary file first and renamed
/// into place, so a failed write never leaves a truncated artifact.
pub fn write_records(records: &[SearchRecord], path: &Path) -> Result<()> {
    let json = to_json(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path)?;
    if let Err(e) = fs::write(&tmp, json.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::info!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

/// Read a previously exported record array
pub fn read_records(path: &Path) -> Result<Vec<SearchRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocSearchError::IndexNotFound(path.display().to_string())
        } else {
            DocSearchError::IoError(e)
        }
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        DocSearchError::InvalidPath(format!("Output path {} has no file name", path.display()))
    })?;

    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
