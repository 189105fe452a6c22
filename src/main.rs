use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connectz::config::{AppConfig, DEFAULT_CONFIG_PATH};
use connectz::game::Game;
use connectz::render::render_board;
use connectz::play_file;

/// Play a connect Z game file and print its result code.
#[derive(Parser)]
#[command(name = "connectz", about = "Play a connect Z game file and print its result code")]
struct Cli {
    /// Game file: `width height win_length`, then one column per line
    inputs: Vec<PathBuf>,

    /// Path to TOML configuration file (`connectz.toml` is used if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final board to stderr
    #[arg(long)]
    board: bool,

    /// Print every move and the resulting status to stderr
    #[arg(long)]
    trace: bool,
}

impl Cli {
    /// The game file, if exactly one was given.
    fn single_input(&self) -> Option<&PathBuf> {
        match self.inputs.as_slice() {
            [input] => Some(input),
            _ => None,
        }
    }
}

fn trace_line(column: i64, game: &Game) -> String {
    let mover = game
        .last_token()
        .map_or("nobody", |token| token.owner().name());
    format!(
        "move {:>3}: {} column {} -> {:?}",
        game.moves_played(),
        mover,
        column,
        game.status()
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.single_input() else {
        println!("Provide one input file");
        return Ok(());
    };

    let config = AppConfig::resolve(cli.config.as_deref()).with_context(|| {
        let path = cli.config.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
        format!("loading config from {}", path.display())
    })?;
    let trace = cli.trace || config.output.trace;
    let show_board = cli.board || config.output.show_board;

    let report = play_file(input, |column, game| {
        if trace {
            eprintln!("{}", trace_line(column, game));
        }
    });

    if trace {
        if let Some(err) = &report.error {
            eprintln!("stopped: {err}");
        }
        if let Some(winner) = report.game.as_ref().and_then(|g| g.status().winner()) {
            eprintln!("{} wins", winner.name());
        }
    }
    if show_board {
        if let Some(game) = &report.game {
            eprint!("{}", render_board(game.board(), &config.render));
        }
    }

    println!("{}", report.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectz::game::GameSpec;

    #[test]
    fn test_single_input_required() {
        let cli = Cli::try_parse_from(["connectz", "game.txt"]).unwrap();
        assert_eq!(cli.single_input(), Some(&PathBuf::from("game.txt")));

        let cli = Cli::try_parse_from(["connectz"]).unwrap();
        assert!(cli.single_input().is_none());

        let cli = Cli::try_parse_from(["connectz", "a.txt", "b.txt"]).unwrap();
        assert!(cli.single_input().is_none());
    }

    #[test]
    fn test_config_flag_is_optional() {
        let cli = Cli::try_parse_from(["connectz", "game.txt"]).unwrap();
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["connectz", "--config", "mine.toml", "game.txt"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("mine.toml")));
    }

    #[test]
    fn test_trace_line_names_the_mover() {
        let mut game = Game::new(GameSpec::new(7, 6, 4).unwrap()).unwrap();
        game.drop(3).unwrap();
        assert_eq!(trace_line(4, &game), "move   1: Player 1 column 4 -> InProgress");
        game.drop(3).unwrap();
        assert_eq!(trace_line(4, &game), "move   2: Player 2 column 4 -> InProgress");
    }
}
