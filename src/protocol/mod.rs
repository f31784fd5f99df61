//! Protocol Module
//!
//! Wire protocol between ledger clients and the server.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Cmd (1)  │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Commands
//! - 0x01: GET_SCORE  - Payload: player name (UTF-8)
//! - 0x02: RECORD_WIN - Payload: player name (UTF-8)
//! - 0x03: LEAGUE     - Payload: empty
//! - 0x04: PING       - Payload: empty
//!
//! ## Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(1) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//!
//! ### Status Codes
//! - 0x00: OK        (HTTP 200) - bincode `ScoreRecord` / `Vec<ScoreRecord>`
//! - 0x01: NOT_FOUND (HTTP 404)
//! - 0x02: ERROR     (HTTP 500 / 400) - UTF-8 message
//! - 0x03: ACCEPTED  (HTTP 202) - bincode `ScoreRecord`

mod codec;
mod command;
mod response;

pub use codec::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
pub use command::{Command, CommandType};
pub use response::{Response, Status};
