//! Report directory persistence: write/read/verify a run report on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json   canonical JSON report (see `report` module)
//!   run_digest.txt    ASCII digest string ("sha256:...")
//! ```
//!
//! The directory path is never part of the digest.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Extra undeclared file → error
//! - Report not valid canonical JSON → error
//! - Unknown `schema_version` → error
//! - Stored digest differs from the recomputed one → error

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::canon::{canonical_json_bytes, CanonError};
use crate::hash::ContentHash;
use crate::report::{report_digest, RunReport, REPORT_SCHEMA_VERSION};

const REPORT_FILENAME: &str = "run_report.json";
const DIGEST_FILENAME: &str = "run_digest.txt";

/// Every file a report directory may hold.
const DECLARED_FILENAMES: &[&str] = &[REPORT_FILENAME, DIGEST_FILENAME];

/// Error writing a report directory.
#[derive(Debug, Error)]
pub enum ReportDirWriteError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
}

/// Error reading a report directory.
#[derive(Debug, Error)]
pub enum ReportDirReadError {
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("missing file: {filename}")]
    MissingFile { filename: String },
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    #[error("report parse error: {detail}")]
    ReportParseError { detail: String },
    #[error("report version mismatch: {found}")]
    ReportVersionMismatch { found: String },
    /// The stored report bytes are not in canonical form.
    #[error("report is not canonical JSON")]
    NonCanonicalReport,
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
    #[error("canonical JSON error: {0}")]
    Canon(#[from] CanonError),
}

/// A report read back from disk and checked against its digest.
#[derive(Debug, Clone)]
pub struct StoredReport {
    /// Parsed report object.
    pub report: Value,
    /// Canonical bytes as stored.
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
}

/// Write `report` to `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(
    report: &RunReport,
    dir: &Path,
) -> Result<ContentHash, ReportDirWriteError> {
    let bytes = report.canonical_bytes()?;
    let digest = report_digest(&bytes);

    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;
    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;

    tracing::debug!(dir = %dir.display(), digest = %digest, "report directory written");
    Ok(digest)
}

/// Read a report directory back, fail-closed.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<StoredReport, ReportDirReadError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored_digest = read_required(dir, DIGEST_FILENAME)?;

    for filename in list_files(dir)? {
        if !DECLARED_FILENAMES.contains(&filename.as_str()) {
            return Err(ReportDirReadError::ExtraFile { name: filename });
        }
    }

    let report: Value =
        serde_json::from_slice(&bytes).map_err(|e| ReportDirReadError::ReportParseError {
            detail: e.to_string(),
        })?;
    let schema_version = report["schema_version"].as_str().unwrap_or("");
    if schema_version != REPORT_SCHEMA_VERSION {
        return Err(ReportDirReadError::ReportVersionMismatch {
            found: schema_version.to_string(),
        });
    }
    if canonical_json_bytes(&report)? != bytes {
        return Err(ReportDirReadError::NonCanonicalReport);
    }

    let recomputed = report_digest(&bytes);
    let stored = String::from_utf8_lossy(&stored_digest).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    Ok(StoredReport {
        report,
        bytes,
        digest: recomputed,
    })
}

/// Write bytes to a path via temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let dir = path.parent().ok_or_else(|| ReportDirWriteError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirWriteError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir` (names only), skipping temp files from `write_atomic`.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let io = |e: std::io::Error| ReportDirReadError::Io {
        detail: e.to_string(),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(".tmp_") {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}
