//! # ScoreLedger
//!
//! A concurrent player-score ledger with:
//! - Win counters keyed by player name
//! - A ranked league of every player by descending score
//! - Volatile (in-memory) and durable (columnar snapshot) backends
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                  (Multiple Clients)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Ledger contract                            │
//! │        get_player_score / record_win / get_league            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │MemoryLedger │          │DurableLedger │
//!   │  (RwLock)   │          │   (RwLock)   │
//!   └─────────────┘          └──────┬───────┘
//!                                   │ load / save
//!                                   ▼
//!                           ┌──────────────┐
//!                           │   Snapshot   │
//!                           │  (columnar)  │
//!                           └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod league;
pub mod snapshot;
pub mod ledger;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LedgerError, Result};
pub use config::{Backend, Config};
pub use ledger::{DurableLedger, Ledger, MemoryLedger};
pub use record::ScoreRecord;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ScoreLedger
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
