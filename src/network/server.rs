//! TCP Server
//!
//! Accepts connections and dispatches them to worker threads.

use std::io::ErrorKind;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver};

use crate::config::Config;
use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;

use super::Connection;

/// How long the acceptor sleeps when no connection is pending
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP server for the score ledger
pub struct Server {
    config: Config,
    ledger: Arc<dyn Ledger>,
    listener: TcpListener,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Bind the configured listen address
    pub fn bind(config: Config, ledger: Arc<dyn Ledger>) -> Result<Self> {
        if config.worker_threads == 0 {
            return Err(LedgerError::Config(
                "worker_threads must be at least 1".to_string(),
            ));
        }

        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            LedgerError::Network(format!("Failed to bind {}: {}", config.listen_addr, e))
        })?;
        listener.set_nonblocking(true)?;

        Ok(Self {
            config,
            ledger,
            listener,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the server is actually listening on
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Flag that stops the accept loop once set
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Run the accept loop (blocking until shutdown)
    ///
    /// Connections already handed to workers are served to completion.
    pub fn run(&self) -> Result<()> {
        tracing::info!(
            addr = %self.local_addr()?,
            backend = self.ledger.backend_name(),
            workers = self.config.worker_threads,
            "listening"
        );

        let (tx, rx) = channel::unbounded::<TcpStream>();
        let workers: Vec<JoinHandle<()>> = (0..self.config.worker_threads)
            .map(|id| self.spawn_worker(id, rx.clone()))
            .collect::<std::io::Result<_>>()?;
        drop(rx);

        while !self.shutdown.load(Ordering::Relaxed) {
            match self.listener.accept() {
                Ok((stream, addr)) => {
                    tracing::trace!("Accepted connection from {}", addr);
                    if tx.send(stream).is_err() {
                        tracing::error!("All workers exited; stopping acceptor");
                        break;
                    }
                }
                Err(e) => {
                    // Persistent errors such as EMFILE must not spin the acceptor
                    if e.kind() != ErrorKind::WouldBlock {
                        tracing::warn!("Accept failed: {}", e);
                    }
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
            }
        }

        tracing::info!("Shutting down, waiting for workers");
        drop(tx);
        for worker in workers {
            if worker.join().is_err() {
                tracing::error!("Worker thread panicked");
            }
        }

        Ok(())
    }

    fn spawn_worker(&self, id: usize, rx: Receiver<TcpStream>) -> std::io::Result<JoinHandle<()>> {
        let ledger = Arc::clone(&self.ledger);
        let read_ms = self.config.read_timeout_ms;
        let write_ms = self.config.write_timeout_ms;

        thread::Builder::new()
            .name(format!("ledger-worker-{}", id))
            .spawn(move || {
                for stream in rx.iter() {
                    if let Err(e) = serve(stream, Arc::clone(&ledger), read_ms, write_ms) {
                        tracing::debug!("Connection closed with error: {}", e);
                    }
                }
            })
    }
}

fn serve(stream: TcpStream, ledger: Arc<dyn Ledger>, read_ms: u64, write_ms: u64) -> Result<()> {
    // Accepted sockets inherit the listener's non-blocking mode on some platforms
    stream.set_nonblocking(false)?;

    let mut connection = Connection::new(stream, ledger)?;
    connection.set_timeouts(read_ms, write_ms)?;
    connection.handle()
}
