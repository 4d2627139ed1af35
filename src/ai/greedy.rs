use crate::error::GameError;
use crate::game::{has_connected_four_at, Board, Player};

use super::agent::Agent;

/// Rule-based agent: win now, else block, else take the center, else the
/// first legal column.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent
    }

    /// First legal column (ascending) where dropping a `player` piece completes
    /// four in a row. Simulates on a scratch copy.
    pub fn winning_column(board: &Board, legal: &[usize], player: Player) -> Option<usize> {
        let mut scratch = board.clone();
        legal.iter().copied().find(|&col| {
            let Ok(row) = scratch.place(col, player) else {
                return false;
            };
            let wins = has_connected_four_at(&scratch, player, row, col);
            let _ = scratch.undo(col);
            wins
        })
    }
}

impl Agent for GreedyAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let legal = board.legal_columns();
        let Some(&first) = legal.first() else {
            return Err(GameError::NoLegalMoves);
        };

        if let Some(col) = Self::winning_column(board, &legal, player) {
            return Ok(col);
        }
        if let Some(col) = Self::winning_column(board, &legal, player.other()) {
            return Ok(col);
        }

        let center = board.center_column();
        if board.is_legal(center) {
            return Ok(center);
        }

        Ok(first)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
