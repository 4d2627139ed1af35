use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::Agent;
use crate::config::BoardConfig;
use crate::error::ArenaError;

use super::match_runner::{game_seed, play_game, GameRecord, IllegalMovePolicy};
use super::metrics::EvaluationReport;

/// Which agent moves first in each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    #[default]
    AgentAFirst,
    /// Agent A moves first in even-numbered games, agent B in odd ones.
    Alternate,
}

/// Evaluation run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub num_games: usize,
    pub start_policy: StartPolicy,
    pub illegal_move_policy: IllegalMovePolicy,
    /// Games between progress log lines.
    pub log_interval: usize,
    /// Base seed for parallel runs; per-game seeds derive from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            num_games: 100,
            start_policy: StartPolicy::default(),
            illegal_move_policy: IllegalMovePolicy::default(),
            log_interval: 10,
            seed: None,
        }
    }
}

/// Plays a fixed number of games between two agents and tallies the results.
pub struct Evaluator {
    config: EvaluatorConfig,
    board: BoardConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig, board: BoardConfig) -> Self {
        Evaluator { config, board }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Whether agent A moves first in game `game_index` (0-based).
    pub fn a_moves_first(&self, game_index: usize) -> bool {
        match self.config.start_policy {
            StartPolicy::AgentAFirst => true,
            StartPolicy::Alternate => game_index % 2 == 0,
        }
    }

    fn play(
        &self,
        game_index: usize,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
    ) -> Result<GameRecord, ArenaError> {
        play_game(
            agent_a,
            agent_b,
            self.board.build(),
            self.a_moves_first(game_index),
            self.config.illegal_move_policy,
        )
    }

    fn log_progress(&self, done: usize, report: &EvaluationReport) {
        let interval = self.config.log_interval.max(1);
        if done % interval == 0 || done == self.config.num_games {
            log::info!(
                "Game {}/{} | {} {} | {} {} | draws {}",
                done,
                self.config.num_games,
                report.agent_a,
                report.agent_a_wins,
                report.agent_b,
                report.agent_b_wins,
                report.draws,
            );
        }
    }

    /// Play all games sequentially, reusing the same two agents.
    pub fn run(
        &self,
        agent_a: &mut dyn Agent,
        agent_b: &mut dyn Agent,
    ) -> Result<EvaluationReport, ArenaError> {
        let mut report = EvaluationReport::new(agent_a.name(), agent_b.name());
        log::info!(
            "Evaluating {} vs {} over {} games",
            report.agent_a,
            report.agent_b,
            self.config.num_games
        );

        let start = Instant::now();
        for game_index in 0..self.config.num_games {
            let record = self.play(game_index, agent_a, agent_b)?;
            log::debug!("game {game_index}: {record:?}");
            report.record(&record);
            self.log_progress(game_index + 1, &report);
        }
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Finished in {:.1}s ({:.1} games/s)",
            report.elapsed_ms as f64 / 1000.0,
            report.games_per_sec()
        );
        Ok(report)
    }

    /// Play all games across the rayon thread pool.
    ///
    /// Each game gets fresh agents built from a per-game seed, so results are
    /// reproducible for a fixed base seed regardless of thread count. When no
    /// seed is configured one is drawn at random and logged.
    pub fn run_parallel<A, B, FA, FB>(
        &self,
        make_a: FA,
        make_b: FB,
    ) -> Result<EvaluationReport, ArenaError>
    where
        A: Agent,
        B: Agent,
        FA: Fn(u64) -> A + Sync,
        FB: Fn(u64) -> B + Sync,
    {
        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        let mut report = EvaluationReport::new(make_a(base_seed).name(), make_b(base_seed).name());
        log::info!(
            "Evaluating {} vs {} over {} games in parallel (seed {base_seed})",
            report.agent_a,
            report.agent_b,
            self.config.num_games
        );

        let start = Instant::now();
        let records = (0..self.config.num_games)
            .into_par_iter()
            .map(|game_index| {
                let mut agent_a = make_a(game_seed(base_seed, 2 * game_index));
                let mut agent_b = make_b(game_seed(base_seed, 2 * game_index + 1));
                self.play(game_index, &mut agent_a, &mut agent_b)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (game_index, record) in records.iter().enumerate() {
            report.record(record);
            self.log_progress(game_index + 1, &report);
        }
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Finished in {:.1}s ({:.1} games/s)",
            report.elapsed_ms as f64 / 1000.0,
            report.games_per_sec()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyAgent, MinimaxAgent, RandomAgent};
    use crate::error::GameError;
    use crate::game::{Board, Player};

    fn evaluator(num_games: usize, start_policy: StartPolicy) -> Evaluator {
        Evaluator::new(
            EvaluatorConfig {
                num_games,
                start_policy,
                ..Default::default()
            },
            BoardConfig::default(),
        )
    }

    /// Tallies equal on every field except wall-clock time.
    fn same_tally(a: &EvaluationReport, b: &EvaluationReport) -> bool {
        EvaluationReport { elapsed_ms: 0, ..a.clone() } == EvaluationReport { elapsed_ms: 0, ..b.clone() }
    }

    #[test]
    fn test_random_vs_random_tally() {
        let mut a = RandomAgent::with_seed(7);
        let mut b = RandomAgent::with_seed(8);
        let report = evaluator(100, StartPolicy::AgentAFirst)
            .run(&mut a, &mut b)
            .unwrap();

        assert_eq!(report.games, 100);
        assert_eq!(report.agent_a_wins + report.agent_b_wins + report.draws, 100);
        assert!(report.agent_a_wins >= 1);
        assert_eq!(report.agent_a_first, 100);
        assert_eq!(report.forfeits, 0);
        let rates = report.win_rate_a() + report.win_rate_b() + report.draw_rate();
        assert!((rates - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_alternate_policy_swaps_first_mover() {
        let eval = evaluator(4, StartPolicy::Alternate);
        assert!(eval.a_moves_first(0));
        assert!(!eval.a_moves_first(1));
        assert!(eval.a_moves_first(2));

        // Greedy mirror games are deterministic, so alternating splits the results
        let mut a = GreedyAgent::new();
        let mut b = GreedyAgent::new();
        let report = eval.run(&mut a, &mut b).unwrap();
        assert_eq!(report.agent_a_first, 2);
        assert_eq!(report.agent_a_wins, report.agent_b_wins);
    }

    #[test]
    fn test_agent_a_first_repeats_deterministic_game() {
        let mut a = GreedyAgent::new();
        let mut b = GreedyAgent::new();
        let report = evaluator(3, StartPolicy::AgentAFirst)
            .run(&mut a, &mut b)
            .unwrap();
        assert!(report.agent_a_wins == 3 || report.agent_b_wins == 3 || report.draws == 3);
    }

    #[test]
    fn test_minimax_dominates_random() {
        let mut a = MinimaxAgent::new(4);
        let mut b = RandomAgent::with_seed(11);
        let report = evaluator(20, StartPolicy::AgentAFirst)
            .run(&mut a, &mut b)
            .unwrap();
        assert!(report.win_rate_a() > 70.0, "{}", report.summary());
    }

    #[test]
    fn test_illegal_move_policy_applies_per_game() {
        struct Offside;
        impl Agent for Offside {
            fn select_move(&mut self, board: &Board, _: Player) -> Result<usize, GameError> {
                Ok(board.cols())
            }
            fn name(&self) -> &str {
                "Offside"
            }
        }

        let mut abort = evaluator(5, StartPolicy::AgentAFirst);
        assert!(matches!(
            abort.run(&mut Offside, &mut RandomAgent::with_seed(1)),
            Err(ArenaError::IllegalMove { column: 7, .. })
        ));

        abort.config.illegal_move_policy = IllegalMovePolicy::Forfeit;
        let report = abort
            .run(&mut Offside, &mut RandomAgent::with_seed(1))
            .unwrap();
        assert_eq!(report.agent_b_wins, 5);
        assert_eq!(report.forfeits, 5);
        assert_eq!(report.total_moves, 0);
    }

    #[test]
    fn test_parallel_run_is_reproducible() {
        let eval = Evaluator::new(
            EvaluatorConfig {
                num_games: 24,
                start_policy: StartPolicy::Alternate,
                seed: Some(99),
                ..Default::default()
            },
            BoardConfig::default(),
        );
        let first = eval
            .run_parallel(RandomAgent::with_seed, RandomAgent::with_seed)
            .unwrap();
        let second = eval
            .run_parallel(RandomAgent::with_seed, RandomAgent::with_seed)
            .unwrap();

        assert!(same_tally(&first, &second));
        assert_eq!(first.games, 24);
        assert_eq!(first.agent_a_first, 12);
        assert_eq!(first.agent_a, "Random");
    }

    #[test]
    fn test_parallel_run_on_small_board() {
        let eval = Evaluator::new(
            EvaluatorConfig {
                num_games: 8,
                seed: Some(3),
                ..Default::default()
            },
            BoardConfig { rows: 4, cols: 5 },
        );
        let report = eval
            .run_parallel(|_| GreedyAgent::new(), RandomAgent::with_seed)
            .unwrap();
        assert_eq!(report.agent_a_wins + report.agent_b_wins + report.draws, 8);
        assert!(report.average_game_length() <= 20.0);
    }
}
