//! Snapshot Writer
//!
//! Streams the names column to a staging file while buffering the scores
//! column, then appends scores and footer and renames the file into place.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::LedgerError;

use super::{temp_path, SnapshotInfo, MAGIC, VERSION};

/// Builder for a new snapshot file
pub struct SnapshotWriter {
    /// Final snapshot path
    path: PathBuf,
    /// Staging file path (renamed to `path` on finish)
    staged_path: PathBuf,
    /// Buffered writer over the staging file
    writer: BufWriter<File>,
    /// Scores column, written after all names
    scores: Vec<u64>,
    /// Running CRC hasher for both columns
    data_hasher: crc32fast::Hasher,
}

impl SnapshotWriter {
    /// Create a writer for the snapshot at `path`
    ///
    /// Writes the header immediately with a placeholder record count.
    pub fn new(path: &Path) -> Result<Self> {
        let staged_path = temp_path(path);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&staged_path)?;

        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        writer.write_all(&0u64.to_le_bytes())?; // Placeholder for record count

        Ok(Self {
            path: path.to_path_buf(),
            staged_path,
            writer,
            scores: Vec::new(),
            data_hasher: crc32fast::Hasher::new(),
        })
    }

    /// Add one record
    pub fn add(&mut self, name: &str, score: u64) -> Result<()> {
        let name_len = u32::try_from(name.len()).map_err(|_| {
            LedgerError::Snapshot(format!("Player name too long: {} bytes", name.len()))
        })?;
        let name_len_bytes = name_len.to_le_bytes();

        self.writer.write_all(&name_len_bytes)?;
        self.writer.write_all(name.as_bytes())?;

        self.data_hasher.update(&name_len_bytes);
        self.data_hasher.update(name.as_bytes());

        self.scores.push(score);
        Ok(())
    }

    /// Number of records added so far
    pub fn record_count(&self) -> u64 {
        self.scores.len() as u64
    }

    /// Write the scores column and footer, sync, and move the file into place
    pub fn finish(mut self) -> Result<SnapshotInfo> {
        for score in &self.scores {
            let bytes = score.to_le_bytes();
            self.writer.write_all(&bytes)?;
            self.data_hasher.update(&bytes);
        }

        let data_crc = self.data_hasher.finalize();

        // Footer: data_crc (4) + padding (4)
        self.writer.write_all(&data_crc.to_le_bytes())?;
        self.writer.write_all(&[0u8; 4])?;
        self.writer.flush()?;

        let record_count = self.scores.len() as u64;

        let mut file = self.writer.into_inner().map_err(|e| {
            LedgerError::Snapshot(format!("Failed to flush snapshot: {}", e))
        })?;
        file.seek(SeekFrom::Start(6))?; // After magic + version
        file.write_all(&record_count.to_le_bytes())?;
        file.sync_all()?;

        let file_size = file.metadata()?.len();
        drop(file);

        fs::rename(&self.staged_path, &self.path)?;

        tracing::trace!(
            path = %self.path.display(),
            records = record_count,
            bytes = file_size,
            "snapshot written"
        );

        Ok(SnapshotInfo {
            path: self.path,
            record_count,
            file_size,
        })
    }
}
