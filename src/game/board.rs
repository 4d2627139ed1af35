use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Grid of cells, row 0 at the top. Pieces stack from the bottom row upward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column index out of range")]
    InvalidColumnIndex,

    #[error("column has no piece to remove")]
    ColumnEmpty,
}

/// Errors raised when building a board from an integer snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has no rows or no columns")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid cell value {value} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("floating piece at ({row}, {col})")]
    Floating { row: usize, col: usize },
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create an empty board with the given dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column preferred by positional play (`cols / 2`).
    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Bounds-checked lookup with signed coordinates, used by line scans.
    pub(crate) fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.get(row, col))
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols || self.rows == 0 {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// A move is legal iff the column exists and its top cell is empty.
    pub fn is_legal(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    /// Row a piece dropped into `col` would land on.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumnIndex);
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.set(row, col, player.to_cell());
        Ok(row)
    }

    /// Remove the topmost piece of a column, returns the row it was taken from.
    /// Exact inverse of [`Board::place`] on the same column.
    pub fn undo(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumnIndex);
        }
        let row = (0..self.rows)
            .find(|&row| self.get(row, col) != Cell::Empty)
            .ok_or(MoveError::ColumnEmpty)?;
        self.set(row, col, Cell::Empty);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Legal columns in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal(col)).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Row-major snapshot using 0 = empty, 1 = Red, 2 = Yellow.
    pub fn to_snapshot(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| match self.get(row, col) {
                        Cell::Empty => 0,
                        Cell::Red => Player::Red.id(),
                        Cell::Yellow => Player::Yellow.id(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Build a board from a snapshot, rejecting ragged rows, unknown values
    /// and pieces with an empty cell below them.
    pub fn from_snapshot(snapshot: &[Vec<u8>]) -> Result<Self, SnapshotError> {
        let rows = snapshot.len();
        let cols = snapshot.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(SnapshotError::Empty);
        }

        let mut board = Board::with_size(rows, cols);
        for (row, values) in snapshot.iter().enumerate() {
            if values.len() != cols {
                return Err(SnapshotError::Ragged {
                    row,
                    found: values.len(),
                    expected: cols,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = match value {
                    0 => Cell::Empty,
                    v => Player::from_id(v)
                        .ok_or(SnapshotError::InvalidCell { row, col, value: v })?
                        .to_cell(),
                };
                board.set(row, col, cell);
            }
        }

        for col in 0..cols {
            for row in 0..rows - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(SnapshotError::Floating { row, col });
                }
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols).map(|col| self.get(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.cols)
            .map(|col| std::char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
