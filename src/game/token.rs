use super::axis::Axis;
use super::board::Position;
use super::player::Player;
use super::run::RunId;

/// Index of a token in the game's token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

/// A placed piece. Position and owner never change; the per-axis run
/// handles are back-references only and are repointed by merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pos: Position,
    owner: Player,
    runs: [Option<RunId>; 4],
}

impl Token {
    pub fn new(row: usize, col: usize, owner: Player) -> Self {
        Token {
            pos: Position { row, col },
            owner,
            runs: [None; 4],
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Run this token currently belongs to on `axis`.
    pub fn run(&self, axis: Axis) -> Option<RunId> {
        self.runs[axis.index()]
    }

    pub(crate) fn link(&mut self, axis: Axis, run: RunId) {
        self.runs[axis.index()] = Some(run);
    }
}
