//! Command definitions
//!
//! Requests a client can send.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    GetScore = 0x01,
    RecordWin = 0x02,
    League = 0x03,
    Ping = 0x04,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up one player's score
    GetScore { name: String },

    /// Record a win for a player
    RecordWin { name: String },

    /// Fetch the full ranking
    League,

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::GetScore { .. } => CommandType::GetScore,
            Command::RecordWin { .. } => CommandType::RecordWin,
            Command::League => CommandType::League,
            Command::Ping => CommandType::Ping,
        }
    }

    /// Player name the command targets, if any
    pub fn player(&self) -> Option<&str> {
        match self {
            Command::GetScore { name } | Command::RecordWin { name } => Some(name.as_str()),
            Command::League | Command::Ping => None,
        }
    }
}
