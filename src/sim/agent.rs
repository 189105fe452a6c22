use crate::game::Game;

/// Anything that can pick the next column for the player to move.
pub trait Agent {
    /// Select a zero-indexed column given the current game. Only called while
    /// the game is in progress, so at least one column is open.
    fn select_column(&mut self, game: &Game) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
