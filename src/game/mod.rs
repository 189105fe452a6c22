//! Connect Z game logic: the gravity grid, tokens, per-axis runs kept in an
//! arena, and the game state machine that updates them incrementally.

mod axis;
mod board;
mod player;
mod run;
mod state;
mod token;

pub use axis::{Axis, Offset};
pub use board::{Board, Cell, Position};
pub use player::Player;
pub use run::{Member, Run, RunArena, RunId};
pub use state::{Game, GameSpec, Outcome, Status};
pub use token::{Token, TokenId};
