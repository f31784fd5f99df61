//! Error types for ScoreLedger
//!
//! Callers of the ledger contract only ever see two conditions:
//! [`LedgerError::NotFound`] and [`LedgerError::DataSourceUnavailable`].
//! The remaining variants are raised by the snapshot format, the wire
//! protocol and the network layer.

use thiserror::Error;

/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Unified error type for ScoreLedger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    // -------------------------------------------------------------------------
    // Ledger Contract Errors
    // -------------------------------------------------------------------------
    #[error("Player not found: {0}")]
    NotFound(String),

    #[error("Data source unavailable during {operation} (player: {name:?}): {cause}")]
    DataSourceUnavailable {
        operation: &'static str,
        name: Option<String>,
        cause: String,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Wrap a load/save failure of the durable backend.
    pub fn unavailable(operation: &'static str, name: Option<&str>, cause: impl ToString) -> Self {
        LedgerError::DataSourceUnavailable {
            operation,
            name: name.map(str::to_owned),
            cause: cause.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }

    pub fn is_data_source_unavailable(&self) -> bool {
        matches!(self, LedgerError::DataSourceUnavailable { .. })
    }

    /// HTTP-equivalent status of this error at the service boundary
    ///
    /// 404 for a missing player, 500 for every operational fault.
    pub fn status_code(&self) -> u16 {
        match self {
            LedgerError::NotFound(_) => 404,
            _ => 500,
        }
    }
}

impl From<bincode::Error> for LedgerError {
    fn from(err: bincode::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
