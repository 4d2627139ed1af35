use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::GameError;
use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent: the same seed yields the same move sequence.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize, GameError> {
        let actions = board.legal_columns();
        if actions.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::drawn_board;
    use crate::game::GameState;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..6 {
            board.place(2, Player::Red).unwrap();
        }

        for _ in 0..100 {
            let action = agent.select_move(&board, Player::Yellow).unwrap();
            assert!(board.is_legal(action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_covers_all_columns() {
        let mut agent = RandomAgent::with_seed(5);
        let board = Board::new();
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[agent.select_move(&board, Player::Red).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_agent_fails_on_full_board() {
        let mut agent = RandomAgent::new();
        assert_eq!(
            agent.select_move(&drawn_board(), Player::Red),
            Err(GameError::NoLegalMoves)
        );
    }

    #[test]
    fn test_seeded_agents_are_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(99);
        let mut b = RandomAgent::with_seed(99);
        let first: Vec<usize> = (0..50)
            .map(|_| a.select_move(&board, Player::Red).unwrap())
            .collect();
        let second: Vec<usize> = (0..50)
            .map(|_| b.select_move(&board, Player::Red).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let player = state.current_player();
            let action = if turn % 2 == 0 {
                agent1.select_move(state.board(), player).unwrap()
            } else {
                agent2.select_move(state.board(), player).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
