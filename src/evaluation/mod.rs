//! Head-to-head evaluation of two agents over many games.

mod harness;
mod match_runner;
mod metrics;

pub use harness::{Evaluator, EvaluatorConfig, StartPolicy};
pub use match_runner::{game_seed, play_game, GameRecord, IllegalMovePolicy, Seat};
pub use metrics::EvaluationReport;
