use super::axis::{Axis, Offset};
use super::player::Player;
use super::token::TokenId;
use crate::error::GameError;

/// A cell address. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Step by `offset`, or `None` if that would leave the non-negative
    /// quadrant.
    pub fn shifted(self, offset: Offset) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(offset.0)?,
            col: self.col.checked_add_signed(offset.1)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken { token: TokenId, owner: Player },
}

/// Gravity-filled grid with a remaining-drop counter per column. Cells are
/// write-once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    remaining: Vec<usize>,
    placed: usize,
}

impl Board {
    /// Whether a `width` x `height` grid can be allocated at all.
    pub fn fits(width: usize, height: usize) -> bool {
        width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }

    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            remaining: vec![height; width],
            placed: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Owner of the token at `pos`, if the position is on the board and taken.
    pub fn owner(&self, pos: Position) -> Option<Player> {
        match self.cell_at(pos)? {
            Cell::Taken { owner, .. } => Some(owner),
            Cell::Empty => None,
        }
    }

    /// Drops still accepted by `col`.
    pub fn remaining(&self, col: usize) -> usize {
        self.remaining[col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || self.remaining[col] == 0
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.placed == self.width * self.height
    }

    /// Number of tokens on the board.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Drop a token in a column, returns the row where it landed. Nothing is
    /// mutated when the drop is rejected.
    pub fn drop_token(
        &mut self,
        col: usize,
        token: TokenId,
        owner: Player,
    ) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::IllegalColumn {
                column: col as i64,
                width: self.width,
            });
        }
        let Some(row) = self.remaining[col].checked_sub(1) else {
            return Err(GameError::IllegalRow { column: col });
        };

        self.remaining[col] = row;
        self.cells[row * self.width + col] = Cell::Taken { token, owner };
        self.placed += 1;
        Ok(row)
    }

    /// Token of `owner` one `offset` away from `from`. Off-board, empty and
    /// opponent cells yield `None`.
    pub fn friend(&self, from: Position, offset: Offset, owner: Player) -> Option<TokenId> {
        match self.cell_at(from.shifted(offset)?)? {
            Cell::Taken { token, owner: o } if o == owner => Some(token),
            _ => None,
        }
    }

    /// Longest contiguous line of `player` tokens along `axis`, found by
    /// scanning every cell.
    pub fn scan_longest(&self, player: Player, axis: Axis) -> usize {
        let step = match axis.neighbour_offsets() {
            [_, Some(high)] => high,
            [Some(low), None] => low,
            [None, None] => return 0,
        };
        let back = (-step.0, -step.1);
        let mut best = 0;

        for row in 0..self.height {
            for col in 0..self.width {
                let start = Position { row, col };
                if self.owner(start) != Some(player) {
                    continue;
                }
                // only count from the first token of each line
                if start.shifted(back).and_then(|p| self.owner(p)) == Some(player) {
                    continue;
                }
                let mut count = 1;
                let mut pos = start;
                while let Some(next) = pos.shifted(step) {
                    if self.owner(next) != Some(player) {
                        break;
                    }
                    count += 1;
                    pos = next;
                }
                best = best.max(count);
            }
        }

        best
    }

    fn cell_at(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.get(pos.row, pos.col))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop(board: &mut Board, col: usize, owner: Player) -> usize {
        let id = TokenId(board.placed());
        board.drop_token(col, id, owner).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.remaining(3), 6);
        assert!(!board.is_full());
    }

    #[test]
    fn test_fits() {
        assert!(Board::fits(7, 6));
        assert!(Board::fits(1, 1));
        assert!(!Board::fits(usize::MAX, 2));
        assert!(!Board::fits(1 << 32, 1 << 32));
    }

    #[test]
    fn test_drop_token() {
        let mut board = Board::new(7, 6);

        let row = drop(&mut board, 3, Player::One);
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.owner(Position { row: 5, col: 3 }), Some(Player::One));

        let row = drop(&mut board, 3, Player::Two);
        assert_eq!(row, 4);
        assert_eq!(board.owner(Position { row: 4, col: 3 }), Some(Player::Two));
        assert_eq!(board.remaining(3), 4);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(4, 3);
        for _ in 0..3 {
            drop(&mut board, 0, Player::One);
        }

        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_token(0, TokenId(3), Player::Two),
            Err(GameError::IllegalRow { column: 0 })
        );
        assert_eq!(board.placed(), 3);
        assert_eq!(board.remaining(0), 0);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(7, 6);
        assert_eq!(
            board.drop_token(7, TokenId(0), Player::One),
            Err(GameError::IllegalColumn { column: 7, width: 7 })
        );
        assert_eq!(board.placed(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 2);
        for col in 0..3 {
            for _ in 0..2 {
                drop(&mut board, col, Player::One);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_friend_ignores_opponents_and_edges() {
        let mut board = Board::new(3, 3);
        drop(&mut board, 0, Player::One);
        drop(&mut board, 1, Player::Two);
        let origin = Position { row: 2, col: 0 };

        assert_eq!(board.friend(origin, (0, 1), Player::Two), Some(TokenId(1)));
        assert_eq!(board.friend(origin, (0, 1), Player::One), None);
        assert_eq!(board.friend(origin, (0, -1), Player::One), None);
        assert_eq!(board.friend(origin, (1, 0), Player::One), None);
    }

    #[test]
    fn test_scan_longest_horizontal_and_vertical() {
        let mut board = Board::new(7, 6);
        for col in 1..4 {
            drop(&mut board, col, Player::One);
        }
        drop(&mut board, 5, Player::One);
        assert_eq!(board.scan_longest(Player::One, Axis::Horizontal), 3);
        assert_eq!(board.scan_longest(Player::One, Axis::Vertical), 1);
        assert_eq!(board.scan_longest(Player::Two, Axis::Horizontal), 0);

        drop(&mut board, 5, Player::One);
        drop(&mut board, 5, Player::One);
        assert_eq!(board.scan_longest(Player::One, Axis::Vertical), 3);
    }

    #[test]
    fn test_scan_longest_diagonals() {
        let mut board = Board::new(4, 4);
        // `/` of three for player one
        drop(&mut board, 0, Player::One);
        drop(&mut board, 1, Player::Two);
        drop(&mut board, 1, Player::One);
        drop(&mut board, 2, Player::Two);
        drop(&mut board, 2, Player::Two);
        drop(&mut board, 2, Player::One);
        assert_eq!(board.scan_longest(Player::One, Axis::DiagSwNe), 3);
        assert_eq!(board.scan_longest(Player::One, Axis::DiagSeNw), 1);
        assert_eq!(board.scan_longest(Player::Two, Axis::DiagSwNe), 2);
        assert_eq!(board.scan_longest(Player::Two, Axis::DiagSeNw), 1);
    }
}
