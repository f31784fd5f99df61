//! Network Module
//!
//! TCP server and client for the ledger protocol.
//!
//! ## Architecture
//! - Single non-blocking acceptor loop
//! - Fixed worker pool fed through a crossbeam channel
//! - Commands routed to a shared `Arc<dyn Ledger>`

mod client;
mod connection;
mod server;

pub use client::Client;
pub use connection::Connection;
pub use server::Server;
