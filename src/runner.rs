//! Plays a game file to completion: the glue between the reader, the engine
//! and the result codes.

use std::path::Path;

use crate::error::PlayError;
use crate::game::{Game, GameSpec, Status};
use crate::input::GameFile;
use crate::output::Output;

/// Final result of playing a file, with the game if one was created.
#[derive(Debug)]
pub struct Report {
    pub output: Output,
    pub game: Option<Game>,
    pub error: Option<PlayError>,
}

/// Play every move in the file at `path`, stopping at the first error.
/// `on_move` sees each 1-indexed column and the game after it was applied.
pub fn play_file<F>(path: &Path, mut on_move: F) -> Report
where
    F: FnMut(i64, &Game),
{
    let mut game = None;
    let result = play_into(path, &mut game, &mut on_move);
    let output = match &result {
        Ok(status) => Output::from(*status),
        Err(e) => Output::from(e),
    };
    Report {
        output,
        game,
        error: result.err(),
    }
}

/// Play the file at `path` and return only its result code.
pub fn run_file(path: &Path) -> Output {
    play_file(path, |_, _| {}).output
}

fn play_into<F>(path: &Path, slot: &mut Option<Game>, on_move: &mut F) -> Result<Status, PlayError>
where
    F: FnMut(i64, &Game),
{
    let file = GameFile::open(path)?;
    let header = file.header();
    let spec = GameSpec::new(header.width, header.height, header.win_length)?;
    let game = slot.insert(Game::new(spec)?);

    let mut status = game.status();
    for column in file.moves()? {
        let column = column?;
        status = game.drop(column.saturating_sub(1))?;
        on_move(column, game);
    }
    Ok(status)
}
