use std::path::PathBuf;

use crate::game::{MoveError, SnapshotError};

/// Errors returned by [`crate::ai::Agent::select_move`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("board error: {0}")]
    Board(#[from] MoveError),

    #[error("invalid board snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Errors that can occur while running evaluation games.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent {agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("agent {agent} failed to select a move: {source}")]
    Agent {
        agent: String,
        #[source]
        source: GameError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
