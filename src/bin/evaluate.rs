use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::ai::AgentKind;
use connect_four::config::AppConfig;
use connect_four::evaluation::{game_seed, Evaluator, StartPolicy};

/// Pit two Connect Four agents against each other and report the results.
#[derive(Parser)]
#[command(name = "evaluate", about = "Run Connect Four agents head to head")]
struct Cli {
    /// First agent (moves first unless --alternate): random, greedy or minimax
    #[arg(long, default_value = "minimax")]
    agent_a: AgentKind,

    /// Second agent: random, greedy or minimax
    #[arg(long, default_value = "random")]
    agent_b: AgentKind,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Alternate which agent moves first
    #[arg(long)]
    alternate: bool,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Spread games across all cores
    #[arg(long)]
    parallel: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.evaluation.num_games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if cli.alternate {
        config.evaluation.start_policy = StartPolicy::Alternate;
    }
    if cli.seed.is_some() {
        config.evaluation.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let search = config.search;
    let evaluator = Evaluator::new(config.evaluation.clone(), config.board);

    let report = if cli.parallel {
        evaluator.run_parallel(
            |seed| cli.agent_a.create(&search, Some(seed)),
            |seed| cli.agent_b.create(&search, Some(seed)),
        )
    } else {
        let seed = config.evaluation.seed;
        let mut agent_a = cli.agent_a.create(&search, seed.map(|s| game_seed(s, 0)));
        let mut agent_b = cli.agent_b.create(&search, seed.map(|s| game_seed(s, 1)));
        evaluator.run(&mut agent_a, &mut agent_b)
    }
    .context("evaluation aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
