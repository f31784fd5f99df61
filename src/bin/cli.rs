//! ScoreLedger CLI Client
//!
//! Command-line interface for interacting with a ScoreLedger server.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scoreledger::network::Client;
use scoreledger::{DurableLedger, Ledger, LedgerError, ScoreRecord};

/// ScoreLedger CLI
#[derive(Parser, Debug)]
#[command(name = "scoreledger-cli")]
#[command(about = "CLI for the ScoreLedger server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5050")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a player's score
    Score {
        /// Player name
        name: String,
    },

    /// Record a win for a player
    Win {
        /// Player name
        name: String,
    },

    /// Show every player ranked by score
    League,

    /// Ping the server
    Ping,

    /// Read "<name> wins" from stdin and record the win
    Play {
        /// Record into this snapshot file instead of the server
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        let code = if e.is_not_found() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<(), LedgerError> {
    let server = args.server;
    let connect = || Client::connect(&server);

    match args.command {
        Commands::Score { name } => {
            let score = connect()?.get_player_score(&name)?;
            println!("{}: {}", name, score);
        }
        Commands::Win { name } => {
            let record = connect()?.record_win(&name)?;
            println!("{}: {}", record.name, record.score);
        }
        Commands::League => {
            let league = connect()?.get_league()?;
            if league.is_empty() {
                println!("(no players)");
            }
            for (rank, record) in league.iter().enumerate() {
                println!("{:>3}. {:<24} {}", rank + 1, record.name, record.score);
            }
        }
        Commands::Ping => {
            connect()?.ping()?;
            println!("PONG");
        }
        Commands::Play { snapshot } => {
            println!("record a win");
            println!("say 'foobar wins' and the given name has a score recorded");
            io::stdout().flush()?;

            let winner = read_winner(io::stdin().lock())?;
            let record = match snapshot {
                Some(path) => play_local(&DurableLedger::open(path)?, &winner)?,
                None => connect()?.record_win(&winner)?,
            };
            println!("{}: {}", record.name, record.score);
        }
    }

    Ok(())
}

// =============================================================================
// Play
// =============================================================================

/// Strip the first " wins" from a line of input, leaving the player name
fn extract_winner(line: &str) -> Option<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let name = line.replacen(" wins", "", 1);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Read one line of input and extract the winner
fn read_winner<R: BufRead>(mut input: R) -> Result<String, LedgerError> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    extract_winner(&line)
        .ok_or_else(|| LedgerError::Protocol(format!("No winner in input {:?}", line)))
}

fn play_local(ledger: &dyn Ledger, winner: &str) -> Result<ScoreRecord, LedgerError> {
    ledger.record_win(winner)
}
