//! Ledger Client
//!
//! Blocking client speaking the ledger protocol, used by the CLI and tests.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{LedgerError, Result};
use crate::protocol::{read_response, write_command, Command, Response, Status};
use crate::record::ScoreRecord;

/// A connection to a ledger server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to a server
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .map_err(|e| LedgerError::Network(format!("Failed to connect: {}", e)))?;
        stream.set_nodelay(true)?;

        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    /// Apply a timeout to both directions of the socket
    pub fn set_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        let stream = self.reader.get_ref();
        stream.set_read_timeout(timeout)?;
        stream.set_write_timeout(timeout)?;
        Ok(())
    }

    pub fn get_player_score(&mut self, name: &str) -> Result<u64> {
        let response = self.send(Command::GetScore {
            name: name.to_owned(),
        })?;
        Self::expect(&response, Status::Ok, Some(name))?;
        Ok(response.record()?.score)
    }

    pub fn record_win(&mut self, name: &str) -> Result<ScoreRecord> {
        let response = self.send(Command::RecordWin {
            name: name.to_owned(),
        })?;
        Self::expect(&response, Status::Accepted, Some(name))?;
        response.record()
    }

    pub fn get_league(&mut self) -> Result<Vec<ScoreRecord>> {
        let response = self.send(Command::League)?;
        Self::expect(&response, Status::Ok, None)?;
        response.records()
    }

    pub fn ping(&mut self) -> Result<()> {
        let response = self.send(Command::Ping)?;
        Self::expect(&response, Status::Ok, None)
    }

    /// Send one command and wait for its response
    pub fn send(&mut self, command: Command) -> Result<Response> {
        write_command(&mut self.writer, &command)?;
        read_response(&mut self.reader)
    }

    fn expect(response: &Response, wanted: Status, name: Option<&str>) -> Result<()> {
        match response.status {
            s if s == wanted => Ok(()),
            Status::NotFound => Err(LedgerError::NotFound(name.unwrap_or_default().to_owned())),
            Status::Error => Err(LedgerError::Network(format!(
                "Server error: {}",
                response.message()
            ))),
            other => Err(LedgerError::Protocol(format!(
                "Unexpected response status {:?} (wanted {:?})",
                other, wanted
            ))),
        }
    }
}
