use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{has_connected_four, Board, MoveError, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, HeuristicKind, Score, TerminalHeuristic};

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root, including the root move itself.
    pub depth: usize,
    /// Alpha-beta pruning; disabling it gives plain minimax.
    pub pruning: bool,
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            pruning: true,
            heuristic: HeuristicKind::Terminal,
        }
    }
}

/// Counters collected during one `get_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `minimax`
    pub nodes: u64,
    /// Nodes evaluated by the heuristic
    pub leaves: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Board plus player to move, mutated in place by the search.
///
/// Every `place` made during a search is paired with an `undo` on the same
/// column before the enclosing call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    board: Board,
    to_move: Player,
}

impl SearchState {
    pub fn new(board: Board, to_move: Player) -> Self {
        SearchState { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Drop a piece for the player to move, then pass the turn.
    pub fn place(&mut self, col: usize) -> Result<usize, MoveError> {
        let row = self.board.place(col, self.to_move)?;
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Take back the top piece of `col` and hand the turn back.
    pub fn undo(&mut self, col: usize) -> Result<usize, MoveError> {
        let row = self.board.undo(col)?;
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Someone has connected four, or no column is open. Full scan, since the
    /// search does not track the last move.
    pub fn is_terminal(&self) -> bool {
        has_connected_four(&self.board, Player::Red)
            || has_connected_four(&self.board, Player::Yellow)
            || self.board.is_full()
    }
}

/// Depth-limited minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(TerminalHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
            pruning: true,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_heuristic(config.depth, config.heuristic.build()).with_pruning(config.pruning)
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Counters from the most recent `get_move`.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the column with the strictly greatest minimax score for `player`,
    /// scanning legal columns in ascending order so the first one seen wins ties.
    pub fn get_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        self.stats = SearchStats::default();
        let mut state = SearchState::new(board.clone(), player);
        let legal = state.board().legal_columns();

        let mut best: Option<(usize, Score)> = None;
        for col in legal {
            state.place(col)?;
            let score = self.minimax(&mut state, player, self.depth - 1, false, Score::MIN, Score::MAX);
            state.undo(col)?;
            let score = score?;

            log::trace!("column {col}: score {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        let (col, score) = best.ok_or(GameError::NoLegalMoves)?;
        log::debug!(
            "minimax depth {} picked column {} (score {}, {} nodes, {} cutoffs)",
            self.depth,
            col,
            score,
            self.stats.nodes,
            self.stats.cutoffs
        );
        Ok(col)
    }

    /// Score `state` for `root` looking `depth` plies ahead. The player to move
    /// in `state` is `root` when `maximizing` and the opponent otherwise.
    pub fn minimax(
        &mut self,
        state: &mut SearchState,
        root: Player,
        depth: usize,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, GameError> {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            self.stats.leaves += 1;
            return Ok(self.heuristic.evaluate(state.board(), root));
        }

        let legal = state.board().legal_columns();
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for col in legal {
            state.place(col)?;
            let score = self.minimax(state, root, depth - 1, !maximizing, alpha, beta);
            state.undo(col)?;
            let score = score?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        self.get_move(board, player)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
