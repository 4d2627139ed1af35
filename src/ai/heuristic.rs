use serde::{Deserialize, Serialize};

use crate::game::win::CONNECT;
use crate::game::{has_connected_four, Board, Player};

/// Search score, always from the root player's perspective.
pub type Score = i32;

/// Value of a position where the root player has connected four.
pub const WIN_SCORE: Score = 1000;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> Score;
}

/// +1000 if `player` has four in a row, -1000 if the opponent does, 0 otherwise.
/// Search quality comes from depth alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHeuristic;

impl Heuristic for TerminalHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> Score {
        if has_connected_four(board, player) {
            WIN_SCORE
        } else if has_connected_four(board, player.other()) {
            -WIN_SCORE
        } else {
            0
        }
    }
}

/// Terminal scoring plus window-based shaping for non-terminal positions.
/// Shaped scores stay strictly inside `(-WIN_SCORE, WIN_SCORE)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl PositionalHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> Score {
        if own == 3 && empty == 1 {
            50
        } else if own == 2 && empty == 2 {
            10
        } else if opp == 3 && empty == 1 {
            -80
        } else if opp == 2 && empty == 2 {
            -10
        } else {
            0
        }
    }

    fn shape(board: &Board, player: Player) -> Score {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        let center = board.center_column();
        for row in 0..board.rows() {
            let cell = board.get(row, center);
            if cell == own_cell {
                score += 3;
            } else if cell == opp_cell {
                score -= 3;
            }
        }

        // Every window of CONNECT cells in the four directions
        let span = CONNECT as isize - 1;
        for (dr, dc) in [(0isize, 1isize), (1, 0), (1, 1), (1, -1)] {
            for row in 0..board.rows() as isize {
                for col in 0..board.cols() as isize {
                    if board.cell_at(row + dr * span, col + dc * span).is_none() {
                        continue;
                    }
                    let (mut own, mut opp, mut empty) = (0, 0, 0);
                    for i in 0..CONNECT as isize {
                        match board.cell_at(row + dr * i, col + dc * i) {
                            Some(c) if c == own_cell => own += 1,
                            Some(c) if c == opp_cell => opp += 1,
                            _ => empty += 1,
                        }
                    }
                    score += Self::score_window(own, opp, empty);
                }
            }
        }

        score
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> Score {
        match TerminalHeuristic.evaluate(board, player) {
            0 => Self::shape(board, player).clamp(-(WIN_SCORE - 1), WIN_SCORE - 1),
            decided => decided,
        }
    }
}

/// Leaf evaluation selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Terminal,
    Positional,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Terminal => Box::new(TerminalHeuristic),
            HeuristicKind::Positional => Box::new(PositionalHeuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{board_from_moves, drawn_board};

    #[test]
    fn terminal_scores_wins_and_losses() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(col, Player::Red).unwrap();
        }
        assert_eq!(TerminalHeuristic.evaluate(&board, Player::Red), WIN_SCORE);
        assert_eq!(TerminalHeuristic.evaluate(&board, Player::Yellow), -WIN_SCORE);
    }

    #[test]
    fn terminal_is_zero_without_a_winner() {
        assert_eq!(TerminalHeuristic.evaluate(&Board::new(), Player::Red), 0);
        assert_eq!(TerminalHeuristic.evaluate(&drawn_board(), Player::Yellow), 0);
        let board = board_from_moves(&[0, 1, 0, 1, 0]);
        assert_eq!(TerminalHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn positional_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(PositionalHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(PositionalHeuristic.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn positional_center_preference() {
        let mut board_center = Board::new();
        board_center.place(3, Player::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.place(0, Player::Red).unwrap();

        let score_center = PositionalHeuristic.evaluate(&board_center, Player::Red);
        let score_edge = PositionalHeuristic.evaluate(&board_edge, Player::Red);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn positional_three_in_a_row_scores_high() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(col, Player::Red).unwrap();
        }
        let score = PositionalHeuristic.evaluate(&board, Player::Red);
        assert!(score > 40, "3-in-a-row should score high, got {score}");
        assert!(score < WIN_SCORE);
    }

    #[test]
    fn positional_keeps_wins_dominant() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place(6, Player::Yellow).unwrap();
        }
        assert_eq!(PositionalHeuristic.evaluate(&board, Player::Yellow), WIN_SCORE);
        assert_eq!(PositionalHeuristic.evaluate(&board, Player::Red), -WIN_SCORE);
    }

    #[test]
    fn heuristic_kind_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: HeuristicKind,
        }
        let w: Wrapper = toml::from_str("kind = \"positional\"").unwrap();
        assert_eq!(w.kind, HeuristicKind::Positional);
    }
}
