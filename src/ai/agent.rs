use std::fmt;
use std::str::FromStr;

use crate::error::GameError;
use crate::game::{Board, Player};

use super::{GreedyAgent, MinimaxAgent, RandomAgent, SearchConfig};

/// Universal interface for all move-selection strategies.
///
/// Every strategy receives the same arguments: a board snapshot and the acting
/// player. Strategies that need more context (search state, encodings) build it
/// internally from the snapshot. The board is never mutated.
pub trait Agent {
    /// Select a column for `player` to drop into.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        (**self).select_move(board, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Built-in strategies selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Random,
    Greedy,
    Minimax,
}

impl AgentKind {
    pub fn all() -> &'static [AgentKind] {
        &[AgentKind::Random, AgentKind::Greedy, AgentKind::Minimax]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AgentKind::Random => "Random",
            AgentKind::Greedy => "Greedy",
            AgentKind::Minimax => "Minimax",
        }
    }

    /// Instantiate the strategy. `seed` only affects the random agent.
    pub fn create(self, search: &SearchConfig, seed: Option<u64>) -> Box<dyn Agent + Send> {
        match self {
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
            AgentKind::Minimax => Box::new(MinimaxAgent::from_config(search)),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            "greedy" | "smart" => Ok(AgentKind::Greedy),
            "minimax" | "search" => Ok(AgentKind::Minimax),
            other => Err(format!(
                "unknown agent '{other}' (expected 'random', 'greedy', or 'minimax')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_agent_kind() {
        assert_eq!("random".parse::<AgentKind>(), Ok(AgentKind::Random));
        assert_eq!("Greedy".parse::<AgentKind>(), Ok(AgentKind::Greedy));
        assert_eq!("smart".parse::<AgentKind>(), Ok(AgentKind::Greedy));
        assert_eq!("MINIMAX".parse::<AgentKind>(), Ok(AgentKind::Minimax));
        assert!("dqn".parse::<AgentKind>().is_err());
    }

    #[test]
    fn test_created_agents_report_their_names() {
        let search = SearchConfig::default();
        for &kind in AgentKind::all() {
            let agent = kind.create(&search, Some(1));
            assert_eq!(agent.name(), kind.display_name());
        }
    }

    #[test]
    fn test_boxed_agents_select_legal_moves() {
        let search = SearchConfig {
            depth: 2,
            ..SearchConfig::default()
        };
        let board = Board::new();
        for &kind in AgentKind::all() {
            let mut agent = kind.create(&search, Some(3));
            let col = agent.select_move(&board, Player::Red).unwrap();
            assert!(board.is_legal(col), "{kind} picked illegal column {col}");
        }
    }
}
