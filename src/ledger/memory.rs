//! Volatile ledger backend
//!
//! HashMap wrapped in a parking_lot RwLock. Nothing is persisted.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{LedgerError, Result};
use crate::league;
use crate::record::ScoreRecord;

use super::Ledger;

/// In-memory score ledger
#[derive(Debug, Default)]
pub struct MemoryLedger {
    scores: RwLock<HashMap<String, u64>>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with the given scores
    ///
    /// Zero scores are skipped, since a stored player always has at least one win.
    pub fn with_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let scores = scores
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .map(|(name, score)| (name.into(), score))
            .collect();

        Self {
            scores: RwLock::new(scores),
        }
    }

    /// Number of recorded players
    pub fn len(&self) -> usize {
        self.scores.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.read().is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get_player_score(&self, name: &str) -> Result<u64> {
        self.scores
            .read()
            .get(name)
            .copied()
            .ok_or_else(|| LedgerError::NotFound(name.to_owned()))
    }

    fn record_win(&self, name: &str) -> Result<ScoreRecord> {
        let mut scores = self.scores.write();

        let current = scores.get(name).copied().unwrap_or(0);
        let score = current.checked_add(1).ok_or_else(|| {
            tracing::error!(player = name, "score overflow");
            LedgerError::unavailable("record_win", Some(name), "score overflow")
        })?;
        scores.insert(name.to_owned(), score);

        tracing::debug!(player = name, score, "recorded win");
        Ok(ScoreRecord::new(name, score))
    }

    fn get_league(&self) -> Result<Vec<ScoreRecord>> {
        Ok(league::rank(&self.scores.read()))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
