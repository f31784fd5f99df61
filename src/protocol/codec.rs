//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ### Payload by Command Type
//! - GET_SCORE:  player name (UTF-8, whole payload)
//! - RECORD_WIN: player name (UTF-8, whole payload)
//! - LEAGUE:     empty
//! - PING:       empty

use std::io::{Read, Write};

use bytes::{BufMut, BytesMut};

use crate::error::{LedgerError, Result};
use super::{Command, CommandType, Response, Status};

/// Header size: 1 byte command/status + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

// =============================================================================
// Framing
// =============================================================================

fn frame(tag: u8, payload: &[u8], what: &str) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len())
        .ok()
        .filter(|len| *len <= MAX_PAYLOAD_SIZE)
        .ok_or_else(|| {
            LedgerError::Protocol(format!(
                "{} payload too large: {} bytes (max {})",
                what,
                payload.len(),
                MAX_PAYLOAD_SIZE
            ))
        })?;

    let mut message = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    message.put_u8(tag);
    message.put_u32(len);
    message.put_slice(payload);
    Ok(message.to_vec())
}

/// Split a complete frame into its tag byte and payload
fn unframe<'a>(bytes: &'a [u8], what: &str) -> Result<(u8, &'a [u8])> {
    if bytes.len() < HEADER_SIZE {
        return Err(LedgerError::Protocol(format!(
            "Incomplete {} header: expected {} bytes, got {}",
            what,
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let tag = bytes[0];
    let payload_len = payload_len(&bytes[..HEADER_SIZE], what)?;

    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(LedgerError::Protocol(format!(
            "Incomplete {} payload: expected {} bytes, got {}",
            what,
            total_len,
            bytes.len()
        )));
    }

    Ok((tag, &bytes[HEADER_SIZE..total_len]))
}

/// Parse and validate the length field of a header
fn payload_len(header: &[u8], what: &str) -> Result<usize> {
    let len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]);
    if len > MAX_PAYLOAD_SIZE {
        return Err(LedgerError::Protocol(format!(
            "{} payload too large: {} bytes (max {})",
            what, len, MAX_PAYLOAD_SIZE
        )));
    }
    Ok(len as usize)
}

/// Read header + payload of one frame from a stream
fn read_frame<R: Read>(reader: &mut R, what: &str) -> Result<Vec<u8>> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let len = payload_len(&header, what)?;

    let mut message = vec![0u8; HEADER_SIZE + len];
    message[..HEADER_SIZE].copy_from_slice(&header);
    if len > 0 {
        reader.read_exact(&mut message[HEADER_SIZE..])?;
    }
    Ok(message)
}

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to bytes
///
/// Format: cmd_type (1) + payload_len (4) + payload.
/// Fails if the payload exceeds `MAX_PAYLOAD_SIZE`.
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    let payload = command.player().unwrap_or("").as_bytes();
    frame(command.command_type() as u8, payload, "command")
}

/// Decode a command from bytes
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let (cmd_type, payload) = unframe(bytes, "command")?;

    match cmd_type {
        t if t == CommandType::GetScore as u8 => Ok(Command::GetScore {
            name: decode_name("GET_SCORE", payload)?,
        }),
        t if t == CommandType::RecordWin as u8 => Ok(Command::RecordWin {
            name: decode_name("RECORD_WIN", payload)?,
        }),
        t if t == CommandType::League as u8 => {
            expect_empty("LEAGUE", payload)?;
            Ok(Command::League)
        }
        t if t == CommandType::Ping as u8 => {
            expect_empty("PING", payload)?;
            Ok(Command::Ping)
        }
        _ => Err(LedgerError::Protocol(format!(
            "Unknown command type: 0x{:02x}",
            cmd_type
        ))),
    }
}

fn decode_name(command: &str, payload: &[u8]) -> Result<String> {
    String::from_utf8(payload.to_vec()).map_err(|e| {
        LedgerError::Protocol(format!("{} command: player name is not UTF-8: {}", command, e))
    })
}

fn expect_empty(command: &str, payload: &[u8]) -> Result<()> {
    if !payload.is_empty() {
        return Err(LedgerError::Protocol(format!(
            "{} command: unexpected payload of {} bytes",
            command,
            payload.len()
        )));
    }
    Ok(())
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
///
/// Format: status (1) + payload_len (4) + payload.
/// Fails if the payload exceeds `MAX_PAYLOAD_SIZE`.
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    frame(
        response.status as u8,
        response.payload.as_deref().unwrap_or(&[]),
        "response",
    )
}

/// Decode a response from bytes
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    let (status_byte, payload) = unframe(bytes, "response")?;

    let status = match status_byte {
        0x00 => Status::Ok,
        0x01 => Status::NotFound,
        0x02 => Status::Error,
        0x03 => Status::Accepted,
        _ => {
            return Err(LedgerError::Protocol(format!(
                "Unknown response status: 0x{:02x}",
                status_byte
            )))
        }
    };

    let payload = if payload.is_empty() {
        None
    } else {
        Some(payload.to_vec())
    };

    Ok(Response { status, payload })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete command from a stream
///
/// Blocks until a complete command is received or an error occurs
pub fn read_command<R: Read>(reader: &mut R) -> Result<Command> {
    decode_command(&read_frame(reader, "command")?)
}

/// Write a command to a stream
///
/// Nothing is written if the command cannot be encoded.
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    writer.write_all(&encode_command(command)?)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    decode_response(&read_frame(reader, "response")?)
}

/// Write a response to a stream
///
/// Nothing is written if the response cannot be encoded.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(&encode_response(response)?)?;
    writer.flush()?;
    Ok(())
}
