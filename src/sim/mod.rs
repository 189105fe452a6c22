//! Random self-play: an agent interface, a uniformly random agent, a game
//! driver and result tallies. Used by the `simulate` binary and by tests that
//! exercise the engine on many boards.

mod agent;
mod episode;
mod random;
mod stats;

pub use agent::Agent;
pub use episode::{play_game, GameRecord};
pub use random::RandomAgent;
pub use stats::SimulationStats;
