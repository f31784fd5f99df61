//! Ledger Module
//!
//! The score ledger contract and its two backends.
//!
//! ## Backends
//! - [`MemoryLedger`]: `HashMap` behind an `RwLock`, lives as long as the process
//! - [`DurableLedger`]: full snapshot load (and save, for wins) per operation
//!
//! ## Concurrency
//! Each backend owns exactly one reader/writer lock. Lookups and league
//! queries take it shared; `record_win` takes it exclusive for the whole
//! read-modify-write (load-modify-save for the durable backend).

mod durable;
mod memory;

pub use durable::DurableLedger;
pub use memory::MemoryLedger;

use crate::error::Result;
use crate::record::ScoreRecord;

/// Operations every score backend provides
pub trait Ledger: Send + Sync {
    /// Current score of `name`
    ///
    /// Fails with `NotFound` if the player has never won.
    fn get_player_score(&self, name: &str) -> Result<u64>;

    /// Add one win to `name`, creating the player at 1 if absent
    fn record_win(&self, name: &str) -> Result<ScoreRecord>;

    /// All players ordered by descending score (ties in no particular order)
    fn get_league(&self) -> Result<Vec<ScoreRecord>>;

    /// Short backend label used in logs
    fn backend_name(&self) -> &'static str;
}
