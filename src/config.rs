//! Configuration for ScoreLedger
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::ledger::{DurableLedger, Ledger, MemoryLedger};

/// Main configuration for a ScoreLedger instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Ledger Configuration
    // -------------------------------------------------------------------------
    /// Which backend holds the scores
    pub backend: Backend,

    /// Snapshot file used by the durable backend
    pub snapshot_path: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Number of worker threads serving connections
    pub worker_threads: usize,

    /// Connection read timeout (milliseconds, 0 disables)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 disables)
    pub write_timeout_ms: u64,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Scores live in process memory only
    Memory,

    /// Scores are persisted to a snapshot file after every win
    Durable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Durable,
            snapshot_path: PathBuf::from("./scoreledger_data/players.sclg"),
            listen_addr: "127.0.0.1:5050".to_string(),
            worker_threads: 8,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Open the configured backend
    pub fn open_ledger(&self) -> Result<Arc<dyn Ledger>> {
        let ledger: Arc<dyn Ledger> = match self.backend {
            Backend::Memory => Arc::new(MemoryLedger::new()),
            Backend::Durable => Arc::new(DurableLedger::open(&self.snapshot_path)?),
        };
        Ok(ledger)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage backend
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Set the snapshot file path (durable backend)
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the number of worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
