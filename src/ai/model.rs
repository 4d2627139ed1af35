//! Adapter for externally trained move models.
//!
//! The engine knows nothing about how a model is trained or evaluated. A model
//! is anything that can score a board snapshot (`0` = empty, `1` = Red,
//! `2` = Yellow) for the player who just moved; [`ModelAgent`] turns such a
//! scorer into an [`Agent`] by scoring the position after each legal drop.

use crate::error::GameError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::minimax::{MinimaxAgent, SearchConfig};

/// Scores the position in `snapshot` from `player`'s point of view, higher is
/// better. NaN is treated as the worst possible score.
pub trait PositionScorer: Send {
    fn score(&self, snapshot: &[Vec<u8>], player: Player) -> f32;
}

impl<F> PositionScorer for F
where
    F: Fn(&[Vec<u8>], Player) -> f32 + Send,
{
    fn score(&self, snapshot: &[Vec<u8>], player: Player) -> f32 {
        self(snapshot, player)
    }
}

/// Agent backed by a [`PositionScorer`]. Without a scorer it plays like a
/// [`MinimaxAgent`].
pub struct ModelAgent {
    scorer: Option<Box<dyn PositionScorer>>,
    fallback: MinimaxAgent,
}

impl ModelAgent {
    pub fn new(scorer: impl PositionScorer + 'static) -> Self {
        ModelAgent {
            scorer: Some(Box::new(scorer)),
            fallback: MinimaxAgent::from_config(&SearchConfig::default()),
        }
    }

    /// Agent with no model attached; every move comes from the fallback search.
    pub fn without_model(search: &SearchConfig) -> Self {
        ModelAgent {
            scorer: None,
            fallback: MinimaxAgent::from_config(search),
        }
    }

    pub fn has_model(&self) -> bool {
        self.scorer.is_some()
    }
}

impl Agent for ModelAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let Some(scorer) = &self.scorer else {
            log::debug!("no model attached, falling back to minimax");
            return self.fallback.get_move(board, player);
        };

        let mut scratch = board.clone();
        let mut best: Option<(usize, f32)> = None;
        for col in board.legal_columns() {
            scratch.place(col, player)?;
            let raw = scorer.score(&scratch.to_snapshot(), player);
            scratch.undo(col)?;

            let score = if raw.is_nan() { f32::NEG_INFINITY } else { raw };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        best.map(|(col, _)| col).ok_or(GameError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "Model"
    }
}
