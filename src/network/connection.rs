//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::protocol::{read_command, write_response, Command, Response};

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Shared score ledger
    ledger: Arc<dyn Ledger>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, ledger: Arc<dyn Ledger>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            ledger,
            peer_addr,
        })
    }

    /// Configure connection timeouts (0 leaves a direction without timeout)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }
        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads commands in a loop and sends responses. Returns when the client
    /// disconnects, times out, or sends a malformed frame.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let command = match read_command(&mut self.reader) {
                Ok(cmd) => cmd,
                Err(LedgerError::Io(ref e)) if is_disconnect(e.kind()) => {
                    tracing::debug!("Client {} disconnected ({:?})", self.peer_addr, e.kind());
                    return Ok(());
                }
                Err(LedgerError::Io(ref e))
                    if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
                {
                    tracing::debug!("Read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    let _ = self.send_response(Response::from_error(&e));
                    return Err(e);
                }
            };

            tracing::trace!("Received command from {}: {:?}", self.peer_addr, command);

            let response = self.execute_command(command);

            if let Err(e) = self.send_response(response) {
                if let LedgerError::Io(ref io_err) = e {
                    if is_disconnect(io_err.kind()) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Execute a command against the ledger and build the response
    fn execute_command(&self, command: Command) -> Response {
        if command.player() == Some("") {
            return Response::error("player name is empty");
        }

        let result = match &command {
            Command::GetScore { name } => self
                .ledger
                .get_player_score(name)
                .and_then(|score| Response::score(&crate::ScoreRecord::new(name.as_str(), score))),
            Command::RecordWin { name } => self
                .ledger
                .record_win(name)
                .and_then(|record| Response::accepted(&record)),
            Command::League => self
                .ledger
                .get_league()
                .and_then(|league| Response::league(&league)),
            Command::Ping => Ok(Response::ok(Some(b"PONG".to_vec()))),
        };

        result.unwrap_or_else(|e| {
            // NotFound is an ordinary answer; the backend already logged data source faults
            if !e.is_not_found() {
                tracing::warn!(
                    "{:?} from {} failed: {}",
                    command.command_type(),
                    self.peer_addr,
                    e
                );
            }
            Response::from_error(&e)
        })
    }

    /// Send a response to the client
    ///
    /// A response too large to frame is replaced by an ERROR response.
    fn send_response(&mut self, response: Response) -> Result<()> {
        match write_response(&mut self.writer, &response) {
            Err(LedgerError::Protocol(msg)) => {
                tracing::warn!("Cannot send response to {}: {}", self.peer_addr, msg);
                write_response(&mut self.writer, &Response::error("response too large"))
            }
            other => other,
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

fn is_disconnect(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UnexpectedEof
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
    )
}
