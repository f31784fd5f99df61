//! Snapshot Reader
//!
//! Loads a whole snapshot into memory, validating header, CRC and both
//! columns before handing back the records.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bytes::Buf;

use crate::error::Result;
use crate::LedgerError;

use super::{FOOTER_SIZE, HEADER_SIZE, MAGIC, VERSION};

/// Fully decoded snapshot
#[derive(Debug)]
pub struct SnapshotReader {
    names: Vec<String>,
    scores: Vec<u64>,
}

impl SnapshotReader {
    /// Open and decode the snapshot at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Self::decode(&data)
    }

    /// Decode a snapshot from raw bytes
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE + FOOTER_SIZE {
            return Err(LedgerError::Snapshot(format!(
                "Snapshot too short: {} bytes",
                data.len()
            )));
        }

        let mut header = &data[..HEADER_SIZE];
        let columns = &data[HEADER_SIZE..data.len() - FOOTER_SIZE];
        let mut footer = &data[data.len() - FOOTER_SIZE..];

        if &header[0..4] != MAGIC {
            return Err(LedgerError::Snapshot(format!(
                "Invalid snapshot magic: expected SCLG, got {:?}",
                &header[0..4]
            )));
        }
        header.advance(4);

        let version = header.get_u16_le();
        if version != VERSION {
            return Err(LedgerError::Snapshot(format!(
                "Unsupported snapshot version: {}",
                version
            )));
        }

        let record_count = header.get_u64_le();

        let stored_crc = footer.get_u32_le();
        let actual_crc = crc32fast::hash(columns);
        if stored_crc != actual_crc {
            return Err(LedgerError::Snapshot(format!(
                "Snapshot checksum mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, actual_crc
            )));
        }

        // Each record needs at least a 4-byte name length and an 8-byte score
        if record_count > (columns.len() / 12) as u64 {
            return Err(LedgerError::Snapshot(format!(
                "Record count {} does not fit in {} bytes of column data",
                record_count,
                columns.len()
            )));
        }
        let count = record_count as usize;

        let mut buf = columns;
        let mut names = Vec::with_capacity(count);
        for i in 0..count {
            if buf.remaining() < 4 {
                return Err(LedgerError::Snapshot(format!(
                    "Names column truncated at record {}",
                    i
                )));
            }
            let name_len = buf.get_u32_le() as usize;
            if buf.remaining() < name_len {
                return Err(LedgerError::Snapshot(format!(
                    "Name of record {} truncated (expected {} bytes, got {})",
                    i,
                    name_len,
                    buf.remaining()
                )));
            }
            let name = std::str::from_utf8(&buf[..name_len])
                .map_err(|e| {
                    LedgerError::Snapshot(format!("Name of record {} is not UTF-8: {}", i, e))
                })?
                .to_owned();
            buf.advance(name_len);
            names.push(name);
        }

        if buf.remaining() != count * 8 {
            return Err(LedgerError::Snapshot(format!(
                "Scores column has {} bytes, expected {}",
                buf.remaining(),
                count * 8
            )));
        }

        let mut scores = Vec::with_capacity(count);
        for i in 0..count {
            let score = buf.get_u64_le();
            // Players only enter the ledger through a win
            if score == 0 {
                return Err(LedgerError::Snapshot(format!(
                    "Record {} ({:?}) has a zero score",
                    i, names[i]
                )));
            }
            scores.push(score);
        }

        Ok(Self { names, scores })
    }

    /// Number of records in the snapshot
    pub fn record_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate over `(name, score)` pairs in file order
    pub fn records(&self) -> impl Iterator<Item = (&str, u64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    /// Consume the reader into a name → score mapping
    ///
    /// If a name appears more than once the last occurrence wins.
    pub fn into_scores(self) -> HashMap<String, u64> {
        self.names.into_iter().zip(self.scores).collect()
    }
}
