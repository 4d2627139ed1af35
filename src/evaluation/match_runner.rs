use serde::{Deserialize, Serialize};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Which of the two evaluated agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// What to do when an agent errors or names an illegal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalMovePolicy {
    /// Stop the whole evaluation with an error.
    #[default]
    Abort,
    /// The offending agent loses the game.
    Forfeit,
}

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<Seat>,
    pub moves: usize,
    pub a_moved_first: bool,
    pub forfeited_by: Option<Seat>,
}

/// Play one game on `board`. The agent moving first plays Red.
pub fn play_game(
    agent_a: &mut dyn Agent,
    agent_b: &mut dyn Agent,
    board: Board,
    a_moves_first: bool,
    policy: IllegalMovePolicy,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::new(board, Player::Red);
    let seat_of = |player: Player| match (player, a_moves_first) {
        (Player::Red, true) | (Player::Yellow, false) => Seat::A,
        _ => Seat::B,
    };

    let mut moves = 0;
    while !state.is_terminal() {
        let player = state.current_player();
        let seat = seat_of(player);
        let agent: &mut dyn Agent = match seat {
            Seat::A => &mut *agent_a,
            Seat::B => &mut *agent_b,
        };

        let failure = match agent.select_move(state.board(), player) {
            Ok(col) if state.board().is_legal(col) => {
                state
                    .apply_move_mut(col)
                    .map_err(|_| ArenaError::IllegalMove {
                        agent: agent.name().to_string(),
                        column: col,
                        legal: state.legal_actions(),
                    })?;
                moves += 1;
                continue;
            }
            Ok(col) => ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                column: col,
                legal: state.legal_actions(),
            },
            Err(source) => ArenaError::Agent {
                agent: agent.name().to_string(),
                source,
            },
        };

        return match policy {
            IllegalMovePolicy::Abort => Err(failure),
            IllegalMovePolicy::Forfeit => {
                log::warn!("{failure}; {} forfeits", agent.name());
                Ok(GameRecord {
                    winner: Some(seat.other()),
                    moves,
                    a_moved_first: a_moves_first,
                    forfeited_by: Some(seat),
                })
            }
        };
    }

    let winner = match state.outcome() {
        GameOutcome::Winner(p) => Some(seat_of(p)),
        GameOutcome::Draw | GameOutcome::InProgress => None,
    };

    Ok(GameRecord {
        winner,
        moves,
        a_moved_first: a_moves_first,
        forfeited_by: None,
    })
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}
