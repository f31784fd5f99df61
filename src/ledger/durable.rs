//! Durable ledger backend
//!
//! Every operation reloads the full snapshot; every win rewrites it.
//!
//! ## Failure policy
//! No scores are cached between calls. The map a win increments is a
//! staging copy that is dropped if the save fails, so after a failed
//! `record_win` readers keep seeing the last snapshot that reached disk.
//!
//! ## Limits
//! The lock is per instance. Two processes (or two `DurableLedger`s) on the
//! same file can still lose each other's updates.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{LedgerError, Result};
use crate::league;
use crate::record::ScoreRecord;
use crate::snapshot;

use super::Ledger;

/// Snapshot-file-backed score ledger
#[derive(Debug)]
pub struct DurableLedger {
    /// Snapshot file holding every record
    path: PathBuf,

    /// Guards the file: shared for loads, exclusive for load-modify-save
    lock: RwLock<()>,
}

impl DurableLedger {
    /// Open a ledger stored at `path`
    ///
    /// Creates the parent directory if needed and loads the snapshot once so
    /// a corrupt file is reported now rather than on first use. A missing
    /// file is fine and means an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Self::unavailable("open", None, &path, e.into()))?;
        }

        let scores =
            snapshot::load(&path).map_err(|e| Self::unavailable("open", None, &path, e))?;

        tracing::info!(
            path = %path.display(),
            players = scores.len(),
            "opened durable ledger"
        );

        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers (call with `lock` held)
    // =========================================================================

    fn load(&self, operation: &'static str, name: Option<&str>) -> Result<HashMap<String, u64>> {
        snapshot::load(&self.path).map_err(|e| Self::unavailable(operation, name, &self.path, e))
    }

    fn save(
        &self,
        operation: &'static str,
        name: Option<&str>,
        scores: &HashMap<String, u64>,
    ) -> Result<()> {
        snapshot::save(&self.path, scores)
            .map(|_| ())
            .map_err(|e| Self::unavailable(operation, name, &self.path, e))
    }

    fn unavailable(
        operation: &'static str,
        name: Option<&str>,
        path: &Path,
        cause: LedgerError,
    ) -> LedgerError {
        tracing::error!(
            operation,
            player = name.unwrap_or(""),
            path = %path.display(),
            cause = %cause,
            "data source unavailable"
        );
        LedgerError::unavailable(operation, name, cause)
    }
}

impl Ledger for DurableLedger {
    fn get_player_score(&self, name: &str) -> Result<u64> {
        let scores = {
            let _guard = self.lock.read();
            self.load("get_player_score", Some(name))?
        };

        scores
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::NotFound(name.to_owned()))
    }

    fn record_win(&self, name: &str) -> Result<ScoreRecord> {
        let _guard = self.lock.write();

        let mut scores = self.load("record_win", Some(name))?;

        let current = scores.get(name).copied().unwrap_or(0);
        let score = current.checked_add(1).ok_or_else(|| {
            tracing::error!(player = name, path = %self.path.display(), "score overflow");
            LedgerError::unavailable("record_win", Some(name), "score overflow")
        })?;
        scores.insert(name.to_owned(), score);

        // On failure the caller cannot tell whether the win was applied, so
        // the whole operation fails and the staged map is discarded.
        self.save("record_win", Some(name), &scores)?;

        tracing::debug!(player = name, score, "recorded win");
        Ok(ScoreRecord::new(name, score))
    }

    fn get_league(&self) -> Result<Vec<ScoreRecord>> {
        let scores = {
            let _guard = self.lock.read();
            self.load("get_league", None)?
        };

        Ok(league::rank(&scores))
    }

    fn backend_name(&self) -> &'static str {
        "durable"
    }
}
