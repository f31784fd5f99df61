//! Score records
//!
//! The single entity the ledger stores: a player name and its win count.

use serde::{Deserialize, Serialize};

/// A player's name and accumulated score
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique key of the record
    pub name: String,

    /// Number of recorded wins (never zero once stored)
    pub score: u64,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
