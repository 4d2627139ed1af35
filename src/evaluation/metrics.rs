use serde::Serialize;

use super::match_runner::{GameRecord, Seat};

/// Tally of an evaluation run between agent A and agent B.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub agent_a_wins: usize,
    pub agent_b_wins: usize,
    pub draws: usize,
    /// Games decided by an illegal move or agent failure.
    pub forfeits: usize,
    /// Games in which agent A moved first.
    pub agent_a_first: usize,
    pub total_moves: usize,
    pub elapsed_ms: u64,
}

impl EvaluationReport {
    pub fn new(agent_a: impl Into<String>, agent_b: impl Into<String>) -> Self {
        EvaluationReport {
            agent_a: agent_a.into(),
            agent_b: agent_b.into(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.total_moves += game.moves;
        match game.winner {
            Some(Seat::A) => self.agent_a_wins += 1,
            Some(Seat::B) => self.agent_b_wins += 1,
            None => self.draws += 1,
        }
        if game.forfeited_by.is_some() {
            self.forfeits += 1;
        }
        if game.a_moved_first {
            self.agent_a_first += 1;
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.games as f64
    }

    /// Agent A win rate as a percentage.
    pub fn win_rate_a(&self) -> f64 {
        self.percent(self.agent_a_wins)
    }

    /// Agent B win rate as a percentage.
    pub fn win_rate_b(&self) -> f64 {
        self.percent(self.agent_b_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.percent(self.draws)
    }

    pub fn average_game_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    pub fn games_per_sec(&self) -> f64 {
        if self.elapsed_ms == 0 {
            return 0.0;
        }
        self.games as f64 * 1000.0 / self.elapsed_ms as f64
    }

    /// Human-readable summary table.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} vs {} over {} games\n",
            self.agent_a, self.agent_b, self.games
        ));
        out.push_str(&format!(
            "  {:<12} {:>6} ({:5.1}%)\n",
            format!("{} wins", self.agent_a),
            self.agent_a_wins,
            self.win_rate_a()
        ));
        out.push_str(&format!(
            "  {:<12} {:>6} ({:5.1}%)\n",
            format!("{} wins", self.agent_b),
            self.agent_b_wins,
            self.win_rate_b()
        ));
        out.push_str(&format!(
            "  {:<12} {:>6} ({:5.1}%)\n",
            "draws",
            self.draws,
            self.draw_rate()
        ));
        if self.forfeits > 0 {
            out.push_str(&format!("  {:<12} {:>6}\n", "forfeits", self.forfeits));
        }
        out.push_str(&format!(
            "  avg length {:.1} moves",
            self.average_game_length()
        ));
        out
    }
}
