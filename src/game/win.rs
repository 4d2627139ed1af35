//! Four-in-a-row detection.
//!
//! Two scans are provided: a full-board scan used when the last move is not
//! known (search leaves), and a localized scan through the last placed cell used
//! by drivers after each move. They agree on every board reached by legal play.

use super::{Board, Cell, GameOutcome, Player};

/// Length of a winning run.
pub const CONNECT: usize = 4;

/// Direction vectors: horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Full-board scan for `CONNECT` consecutive cells owned by `player`.
pub fn has_connected_four(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    for row in 0..board.rows() as isize {
        for col in 0..board.cols() as isize {
            for (dr, dc) in DIRECTIONS {
                let run = (0..CONNECT as isize)
                    .all(|i| board.cell_at(row + dr * i, col + dc * i) == Some(cell));
                if run {
                    return true;
                }
            }
        }
    }
    false
}

/// Localized scan through `(row, col)`. False if that cell does not hold `player`.
pub fn has_connected_four_at(board: &Board, player: Player, row: usize, col: usize) -> bool {
    let cell = player.to_cell();
    if board.cell_at(row as isize, col as isize) != Some(cell) {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + run_length(board, cell, row as isize, col as isize, dr, dc)
            + run_length(board, cell, row as isize, col as isize, -dr, -dc);
        count >= CONNECT
    })
}

/// Number of consecutive `cell`s starting one step away from the origin.
fn run_length(board: &Board, cell: Cell, row: isize, col: isize, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row + dr, col + dc);
    while board.cell_at(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Win check with an optional `(row, col)` hint for the last placed piece.
pub fn check_winner(board: &Board, player: Player, last_move: Option<(usize, usize)>) -> bool {
    match last_move {
        Some((row, col)) => has_connected_four_at(board, player, row, col),
        None => has_connected_four(board, player),
    }
}

/// Derive the outcome of a position. With a hint only the owner of the last
/// placed cell can have just won.
pub fn outcome(board: &Board, last_move: Option<(usize, usize)>) -> GameOutcome {
    let winner = match last_move {
        Some((row, col)) => match board.cell_at(row as isize, col as isize) {
            Some(Cell::Red) => Some(Player::Red),
            Some(Cell::Yellow) => Some(Player::Yellow),
            _ => None,
        }
        .filter(|&p| has_connected_four_at(board, p, row, col)),
        None => [Player::Red, Player::Yellow]
            .into_iter()
            .find(|&p| has_connected_four(board, p)),
    };

    match winner {
        Some(player) => GameOutcome::Winner(player),
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

/// A full board with no connected four for either player.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && !has_connected_four(board, Player::Red)
        && !has_connected_four(board, Player::Yellow)
}
