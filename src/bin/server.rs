//! ScoreLedger Server Binary
//!
//! Starts the TCP server for the score ledger.

use clap::{Parser, ValueEnum};
use scoreledger::network::Server;
use scoreledger::{Backend, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// ScoreLedger Server
#[derive(Parser, Debug)]
#[command(name = "scoreledger-server")]
#[command(about = "Concurrent player-score ledger")]
#[command(version)]
struct Args {
    /// Storage backend
    #[arg(short, long, value_enum, default_value = "durable")]
    backend: BackendArg,

    /// Snapshot file (durable backend)
    #[arg(short, long, default_value = "./scoreledger_data/players.sclg")]
    snapshot: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5050")]
    listen: String,

    /// Number of worker threads
    #[arg(short, long, default_value = "8")]
    workers: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendArg {
    Memory,
    Durable,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Memory => Backend::Memory,
            BackendArg::Durable => Backend::Durable,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scoreledger=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("ScoreLedger Server v{}", scoreledger::VERSION);
    tracing::info!("Backend: {:?}", args.backend);
    if matches!(args.backend, BackendArg::Durable) {
        tracing::info!("Snapshot file: {}", args.snapshot);
    }

    let config = Config::builder()
        .backend(args.backend.into())
        .snapshot_path(&args.snapshot)
        .listen_addr(&args.listen)
        .worker_threads(args.workers)
        .build();

    let ledger = match config.open_ledger() {
        Ok(ledger) => ledger,
        Err(e) => {
            tracing::error!("Failed to open ledger: {}", e);
            std::process::exit(1);
        }
    };

    let server = match Server::bind(config, ledger) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
