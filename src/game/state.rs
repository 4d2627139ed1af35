use super::board::MoveError;
use super::{win, Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
    InProgress,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("game is already over")]
    GameOver,
}

/// Authoritative state owned by a driver: one move per turn, outcome updated
/// from the last placed cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<(usize, usize)>,
    outcome: GameOutcome,
    move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::new(Board::new(), Player::Red) // Red starts
    }

    /// Resume from an arbitrary board. The outcome is derived by full scan
    /// since the last move is unknown.
    pub fn new(board: Board, to_move: Player) -> Self {
        let outcome = win::outcome(&board, None);
        let move_count = board.piece_count();
        GameState {
            board,
            current_player: to_move,
            last_move: None,
            outcome,
            move_count,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// `(row, col)` of the most recent move made through this state.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, PlayError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returns the row the piece landed on.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, PlayError> {
        if self.is_terminal() {
            return Err(PlayError::GameOver);
        }

        let row = self.board.place(column, self.current_player)?;
        self.last_move = Some((row, column));
        self.move_count += 1;
        self.outcome = win::outcome(&self.board, self.last_move);
        self.current_player = self.current_player.other();

        Ok(row)
    }
}
