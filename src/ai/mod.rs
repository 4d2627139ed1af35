//! Move-selection strategies: the [`Agent`] trait, random and rule-based
//! agents, minimax search, and the adapter for external models.

mod agent;
mod greedy;
mod heuristic;
mod minimax;
mod model;
mod random;
pub mod state_encoding;

pub use agent::{Agent, AgentKind};
pub use greedy::GreedyAgent;
pub use heuristic::{
    Heuristic, HeuristicKind, PositionalHeuristic, Score, TerminalHeuristic, WIN_SCORE,
};
pub use minimax::{MinimaxAgent, SearchConfig, SearchState, SearchStats};
pub use model::{ModelAgent, PositionScorer};
pub use random::RandomAgent;
