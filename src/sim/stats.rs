use serde::{Deserialize, Serialize};

use super::episode::GameRecord;
use crate::game::Status;

/// Tally of simulated game results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
    pub shortest_game: Option<usize>,
    pub longest_game: Option<usize>,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        let length = game.moves.len();
        self.games += 1;
        self.total_moves += length;
        self.shortest_game = Some(self.shortest_game.map_or(length, |s| s.min(length)));
        self.longest_game = Some(self.longest_game.map_or(length, |l| l.max(length)));

        match game.status {
            Status::PlayerOneWin => self.player_one_wins += 1,
            Status::PlayerTwoWin => self.player_two_wins += 1,
            Status::Draw => self.draws += 1,
            Status::InProgress => {}
        }
    }

    /// Share of games won by player one.
    pub fn player_one_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.player_one_wins as f32 / self.games as f32
    }

    /// Share of games drawn.
    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}
