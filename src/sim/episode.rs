use super::agent::Agent;
use crate::error::GameError;
use crate::game::{Game, GameSpec, Status};

/// Moves and final status of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Zero-indexed columns in the order they were played.
    pub moves: Vec<usize>,
    pub status: Status,
}

/// Play one game to the end. The agent plays both sides.
pub fn play_game(spec: GameSpec, agent: &mut dyn Agent) -> Result<GameRecord, GameError> {
    let mut game = Game::new(spec)?;
    let mut moves = Vec::with_capacity(spec.width * spec.height);

    while !game.is_terminal() {
        let column = agent.select_column(&game);
        game.drop(column as i64)?;
        moves.push(column);
    }

    Ok(GameRecord {
        moves,
        status: game.status(),
    })
}
