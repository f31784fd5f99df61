//! Snapshot Module
//!
//! Columnar on-disk format for the durable ledger. A snapshot holds every
//! `{name, score}` record and is always rewritten as a whole.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (14 bytes)                                       │
//! │   Magic: "SCLG" (4) | Version: u16 (2) | Count: u64 (8) │
//! ├─────────────────────────────────────────────────────────┤
//! │ Names Column (variable)                                 │
//! │   [NameLen: u32][Name bytes (UTF-8)]                    │
//! │   ... repeated Count times ...                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Scores Column (Count * 8 bytes)                         │
//! │   [Score: u64] ... repeated Count times ...             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Footer (8 bytes)                                        │
//! │   DataCRC: u32 (4) | Padding (4)                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. The CRC covers both columns.
//!
//! ## Replacement
//! The writer streams into `<path>.tmp`, syncs it, then renames it over
//! `<path>`. A crash mid-write leaves the previous snapshot untouched.

mod reader;
mod writer;

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;

// =============================================================================
// Shared Constants (used by writer and reader)
// =============================================================================

/// Magic bytes identifying a ScoreLedger snapshot file
pub(crate) const MAGIC: &[u8; 4] = b"SCLG";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + RecordCount (8) = 14 bytes
pub(crate) const HEADER_SIZE: usize = 14;

/// Footer size: DataCRC (4) + Padding (4) = 8 bytes
pub(crate) const FOOTER_SIZE: usize = 8;

/// Suffix appended to the snapshot path for the in-progress file
pub(crate) const TEMP_SUFFIX: &str = ".tmp";

// =============================================================================
// Snapshot Metadata
// =============================================================================

/// Metadata describing a snapshot that was just written
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    /// Final path of the snapshot file
    pub path: PathBuf,
    /// Number of records in the snapshot
    pub record_count: u64,
    /// File size in bytes
    pub file_size: u64,
}

/// Path of the temporary file a snapshot is staged in before the rename
pub fn temp_path(path: &Path) -> PathBuf {
    let mut staged = OsString::from(path.as_os_str());
    staged.push(TEMP_SUFFIX);
    PathBuf::from(staged)
}

/// Load every record of the snapshot at `path`.
///
/// A missing file is an empty ledger, not an error.
pub fn load(path: &Path) -> Result<HashMap<String, u64>> {
    match SnapshotReader::open(path) {
        Ok(reader) => Ok(reader.into_scores()),
        Err(crate::LedgerError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e),
    }
}

/// Replace the snapshot at `path` with the given records.
pub fn save(path: &Path, scores: &HashMap<String, u64>) -> Result<SnapshotInfo> {
    let mut writer = SnapshotWriter::new(path)?;
    for (name, &score) in scores {
        writer.add(name, score)?;
    }
    writer.finish()
}
