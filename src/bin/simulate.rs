use anyhow::{Context, Result};
use clap::Parser;

use connectz::game::GameSpec;
use connectz::sim::{play_game, Agent, RandomAgent, SimulationStats};

/// Play random connect Z games and print a JSON tally of the results.
#[derive(Parser)]
#[command(name = "simulate", about = "Play random connect Z games")]
struct Cli {
    #[arg(long, default_value_t = 7)]
    width: i64,

    #[arg(long, default_value_t = 6)]
    height: i64,

    #[arg(long, default_value_t = 4)]
    win_length: i64,

    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Seed for reproducible runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let spec = GameSpec::new(cli.width, cli.height, cli.win_length)
        .context("invalid board")?;
    let mut agent = match cli.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };

    let mut stats = SimulationStats::new();
    for _ in 0..cli.games {
        stats.record(&play_game(spec, &mut agent)?);
    }

    eprintln!(
        "{} {} self-play games: player one {:.1}%, draws {:.1}%, {:.1} moves on average",
        stats.games,
        agent.name(),
        stats.player_one_win_rate() * 100.0,
        stats.draw_rate() * 100.0,
        stats.average_game_length()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("serializing stats")?
    );
    Ok(())
}
