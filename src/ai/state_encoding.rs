use crate::game::{Board, Player};

/// Number of planes produced by [`encode_board`].
pub const CHANNELS: usize = 3;

/// Encode a board as a flat `[CHANNELS, rows, cols]` array (player-relative).
///
/// Channel 0: `player`'s pieces (1.0 where placed)
/// Channel 1: Opponent's pieces (1.0 where placed)
/// Channel 2: Valid move mask (1.0 at the landing row of each legal column)
pub fn encode_board(board: &Board, player: Player) -> Vec<f32> {
    let (rows, cols) = (board.rows(), board.cols());
    let plane = rows * cols;
    let mut data = vec![0.0f32; CHANNELS * plane];
    let own_cell = player.to_cell();
    let opponent_cell = player.other().to_cell();

    for row in 0..rows {
        for col in 0..cols {
            let cell = board.get(row, col);
            let idx = row * cols + col;
            if cell == own_cell {
                data[idx] = 1.0;
            } else if cell == opponent_cell {
                data[plane + idx] = 1.0;
            }
        }
    }

    for col in board.legal_columns() {
        if let Some(landing_row) = board.landing_row(col) {
            data[2 * plane + landing_row * cols + col] = 1.0;
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_initial_board() {
        let data = encode_board(&Board::new(), Player::Red);
        assert_eq!(data.len(), 3 * 6 * 7);

        // Channels 0 and 1 should be all zeros (empty board)
        assert!(data[..84].iter().all(|&v| v == 0.0));

        // Channel 2 should have 1.0 at bottom row (row 5) for all 7 columns
        for col in 0..7 {
            assert_eq!(data[84 + 5 * 7 + col], 1.0, "landing mask at col {col}");
        }
        assert_eq!(data[84..].iter().filter(|&&v| v == 1.0).count(), 7);
    }

    #[test]
    fn test_encode_after_one_move() {
        let mut board = Board::new();
        board.place(3, Player::Red).unwrap();
        // Encoded for Yellow: Red's piece lands in the opponent channel
        let data = encode_board(&board, Player::Yellow);

        assert_eq!(data[5 * 7 + 3], 0.0);
        assert_eq!(data[42 + 5 * 7 + 3], 1.0);

        // Column 3 now lands at row 4
        assert_eq!(data[84 + 4 * 7 + 3], 1.0);
        assert_eq!(data[84 + 5 * 7 + 3], 0.0);

        // Same board from Red's side swaps the first two planes
        let red = encode_board(&board, Player::Red);
        assert_eq!(red[5 * 7 + 3], 1.0);
        assert_eq!(red[42 + 5 * 7 + 3], 0.0);
    }

    #[test]
    fn test_full_column_has_no_landing_cell() {
        let mut board = Board::with_size(4, 5);
        for _ in 0..4 {
            board.place(0, Player::Red).unwrap();
        }
        let data = encode_board(&board, Player::Red);
        let plane = 4 * 5;
        for row in 0..4 {
            assert_eq!(data[2 * plane + row * 5], 0.0);
        }
    }
}
