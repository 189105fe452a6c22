use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::Game;

/// An agent that selects uniformly at random from open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible simulations.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, game: &Game) -> usize {
        let columns = game.legal_columns();
        assert!(!columns.is_empty(), "No open columns available");
        columns[self.rng.random_range(0..columns.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
