//! Response definitions
//!
//! Replies sent back to clients.

use crate::error::{LedgerError, Result};
use crate::record::ScoreRecord;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0x00,
    NotFound = 0x01,
    Error = 0x02,
    Accepted = 0x03,
}

impl Status {
    /// Equivalent HTTP status code
    pub fn http_code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Accepted => 202,
            Status::NotFound => 404,
            Status::Error => 500,
        }
    }
}

/// A response to send to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Optional payload (encoded records for OK/ACCEPTED, message for ERROR)
    pub payload: Option<Vec<u8>>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }

    /// OK response carrying one record
    pub fn score(record: &ScoreRecord) -> Result<Self> {
        Ok(Self::ok(Some(bincode::serialize(record)?)))
    }

    /// OK response carrying the ranked league
    pub fn league(league: &[ScoreRecord]) -> Result<Self> {
        Ok(Self::ok(Some(bincode::serialize(league)?)))
    }

    /// ACCEPTED response carrying the record produced by a win
    pub fn accepted(record: &ScoreRecord) -> Result<Self> {
        Ok(Self {
            status: Status::Accepted,
            payload: Some(bincode::serialize(record)?),
        })
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            payload: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Self {
            status: Status::Error,
            payload: Some(message.as_bytes().to_vec()),
        }
    }

    /// Translate a ledger failure into a response
    ///
    /// Internal causes are not exposed to clients.
    pub fn from_error(err: &LedgerError) -> Self {
        match err {
            LedgerError::NotFound(_) => Self::not_found(),
            LedgerError::Protocol(msg) => Self::error(msg),
            _ => Self::error("internal server error"),
        }
    }

    // =========================================================================
    // Payload Accessors (client side)
    // =========================================================================

    /// Decode the payload as a single record
    pub fn record(&self) -> Result<ScoreRecord> {
        Ok(bincode::deserialize(self.payload_bytes()?)?)
    }

    /// Decode the payload as a league
    pub fn records(&self) -> Result<Vec<ScoreRecord>> {
        Ok(bincode::deserialize(self.payload_bytes()?)?)
    }

    /// Payload interpreted as UTF-8 text (lossy)
    pub fn message(&self) -> String {
        self.payload
            .as_deref()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .unwrap_or_default()
    }

    fn payload_bytes(&self) -> Result<&[u8]> {
        self.payload
            .as_deref()
            .ok_or_else(|| LedgerError::Protocol("response has no payload".to_string()))
    }
}
