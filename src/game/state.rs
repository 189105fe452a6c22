use super::axis::Axis;
use super::board::{Board, Cell, Position};
use super::player::Player;
use super::run::{Member, Run, RunArena, RunId};
use super::token::{Token, TokenId};
use crate::error::GameError;

/// Board dimensions and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GameSpec {
    pub width: usize,
    pub height: usize,
    pub win_length: usize,
}

impl GameSpec {
    /// Validate raw header values. Non-positive sizes, a win length that
    /// cannot fit in either direction and a grid too large to address are
    /// rejected.
    pub fn new(width: i64, height: i64, win_length: i64) -> Result<Self, GameError> {
        let illegal = GameError::IllegalGameSpec {
            width,
            height,
            win_length,
        };
        let positive = |v: i64| usize::try_from(v).ok().filter(|&v| v > 0);
        let (Some(w), Some(h), Some(z)) = (positive(width), positive(height), positive(win_length))
        else {
            return Err(illegal);
        };
        if z > w.max(h) || !Board::fits(w, h) {
            return Err(illegal);
        }
        Ok(GameSpec {
            width: w,
            height: h,
            win_length: z,
        })
    }

    /// Check a `GameSpec` built directly from its fields.
    pub fn validate(&self) -> Result<(), GameError> {
        Self::new(
            self.width as i64,
            self.height as i64,
            self.win_length as i64,
        )
        .map(|_| ())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Status {
    pub fn win_for(player: Player) -> Status {
        match player {
            Player::One => Status::PlayerOneWin,
            Player::Two => Status::PlayerTwoWin,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// The winning player, if the game ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::PlayerOneWin => Some(Player::One),
            Status::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }
}

/// What a single drop decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Player),
    Draw,
}

/// A game in progress. Runs are updated incrementally on every drop, so
/// win detection never rescans the board.
#[derive(Debug, Clone)]
pub struct Game {
    spec: GameSpec,
    board: Board,
    tokens: Vec<Token>,
    runs: RunArena,
    current_player: Player,
    status: Status,
}

impl Game {
    /// Create an empty game; player one moves first.
    pub fn new(spec: GameSpec) -> Result<Self, GameError> {
        spec.validate()?;
        Ok(Game {
            spec,
            board: Board::new(spec.width, spec.height),
            tokens: Vec::with_capacity(spec.width * spec.height),
            runs: RunArena::new(),
            current_player: Player::One,
            status: Status::InProgress,
        })
    }

    pub fn spec(&self) -> GameSpec {
        self.spec
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Player whose turn it is; after a win, the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn runs(&self) -> &RunArena {
        &self.runs
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    /// The most recently placed token.
    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn moves_played(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Columns that still accept a token. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.spec.width)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The run through the token at (`row`, `col`) on `axis`, if any.
    pub fn run_at(&self, row: usize, col: usize, axis: Axis) -> Option<&Run> {
        let id = self.token_at(Position { row, col })?;
        let run = self.tokens[id.0].run(axis)?;
        self.runs.get(run)
    }

    /// Drop a token for the current player into a zero-indexed column.
    pub fn drop(&mut self, column: i64) -> Result<Status, GameError> {
        if self.is_terminal() {
            return Err(GameError::IllegalContinue);
        }
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < self.spec.width)
            .ok_or(GameError::IllegalColumn {
                column,
                width: self.spec.width,
            })?;

        let mover = self.current_player;
        let id = TokenId(self.tokens.len());
        let row = self.board.drop_token(col, id, mover)?;
        self.tokens.push(Token::new(row, col, mover));

        self.status = match self.resolve(id) {
            Outcome::Win(player) => Status::win_for(player),
            Outcome::Draw => Status::Draw,
            Outcome::Continue => {
                self.current_player = mover.other();
                Status::InProgress
            }
        };
        Ok(self.status)
    }

    /// Join the new token to its neighbours on every axis, stopping at the
    /// first run that reaches the win length.
    fn resolve(&mut self, token: TokenId) -> Outcome {
        let owner = self.tokens[token.0].owner();
        if Axis::ALL.into_iter().any(|axis| self.join_axis(token, axis)) {
            Outcome::Win(owner)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }

    /// Extend, merge or create the run through `token` on `axis`. Returns
    /// true as soon as a touched run reaches the win length.
    fn join_axis(&mut self, token: TokenId, axis: Axis) -> bool {
        let pos = self.tokens[token.0].pos();
        let owner = self.tokens[token.0].owner();
        let mut bare = [None; 2];

        for (side, offset) in axis.neighbour_offsets().into_iter().enumerate() {
            let Some(friend) = offset.and_then(|o| self.board.friend(pos, o, owner)) else {
                continue;
            };
            let theirs = self.tokens[friend.0].run(axis);
            let ours = self.tokens[token.0].run(axis);
            let touched = match (theirs, ours) {
                (None, _) => {
                    bare[side] = Some(friend);
                    continue;
                }
                (Some(theirs), None) => {
                    self.runs.extend(theirs, Member::new(token, pos));
                    self.tokens[token.0].link(axis, theirs);
                    theirs
                }
                (Some(theirs), Some(ours)) if axis.can_merge() && theirs != ours => {
                    let merged = self.runs.merge(ours, theirs);
                    self.relink(axis, merged);
                    merged
                }
                (Some(_), Some(_)) => continue,
            };
            if self.wins(touched) {
                return true;
            }
        }

        for friend in bare.into_iter().flatten() {
            let friend_pos = self.tokens[friend.0].pos();
            let run = match self.tokens[token.0].run(axis) {
                Some(ours) => {
                    self.runs.extend(ours, Member::new(friend, friend_pos));
                    ours
                }
                None => {
                    let run = self.runs.create(
                        axis,
                        Member::new(token, pos),
                        Member::new(friend, friend_pos),
                    );
                    self.tokens[token.0].link(axis, run);
                    run
                }
            };
            self.tokens[friend.0].link(axis, run);
            if self.wins(run) {
                return true;
            }
        }

        false
    }

    fn relink(&mut self, axis: Axis, run: RunId) {
        for member in self.runs[run].members() {
            self.tokens[member.0].link(axis, run);
        }
    }

    fn wins(&self, run: RunId) -> bool {
        self.runs[run].span() >= self.spec.win_length
    }

    fn token_at(&self, pos: Position) -> Option<TokenId> {
        if pos.row >= self.spec.height || pos.col >= self.spec.width {
            return None;
        }
        match self.board.get(pos.row, pos.col) {
            Cell::Taken { token, .. } => Some(token),
            Cell::Empty => None,
        }
    }
}
