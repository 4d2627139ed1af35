//! Core Connect Four game logic: board representation, player types, win
//! detection, and the driver-side game state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, MoveError, SnapshotError, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, PlayError};
pub use win::{check_winner, has_connected_four, has_connected_four_at, is_draw};
