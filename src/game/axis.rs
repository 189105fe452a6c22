use super::board::Position;

/// A relative (row, column) step on the grid. Row 0 is the top.
pub type Offset = (isize, isize);

/// One of the four lines along which runs are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right, `/`
    DiagSwNe,
    /// Bottom-right to top-left, `\`
    DiagSeNw,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagSwNe,
        Axis::DiagSeNw,
    ];

    /// Slot of this axis in per-token tables.
    pub fn index(self) -> usize {
        match self {
            Axis::Vertical => 0,
            Axis::Horizontal => 1,
            Axis::DiagSwNe => 2,
            Axis::DiagSeNw => 3,
        }
    }

    /// Neighbour offsets on the low and high side of the axis, ordered by
    /// the principal coordinate. North is never listed: under gravity the
    /// cell above a fresh token is always empty.
    pub fn neighbour_offsets(self) -> [Option<Offset>; 2] {
        match self {
            Axis::Vertical => [None, Some((1, 0))],
            Axis::Horizontal => [Some((0, -1)), Some((0, 1))],
            Axis::DiagSwNe => [Some((1, -1)), Some((-1, 1))],
            Axis::DiagSeNw => [Some((-1, -1)), Some((1, 1))],
        }
    }

    /// Coordinate runs on this axis are ordered by: the row for vertical
    /// runs, the column for everything else.
    pub fn principal(self, pos: Position) -> usize {
        match self {
            Axis::Vertical => pos.row,
            _ => pos.col,
        }
    }

    /// Only vertical runs are guaranteed to grow from a single side.
    pub fn can_merge(self) -> bool {
        !matches!(self, Axis::Vertical)
    }

    /// Length of a run whose extreme members sit at `start` and `end`.
    ///
    /// The Manhattan distance undercounts straight runs by one token and is
    /// taken as-is for diagonals, so a diagonal of `k` tokens measures
    /// `2(k - 1)`. Win timing depends on this exact formula.
    pub fn span(self, start: Position, end: Position) -> usize {
        let raw = start.row.abs_diff(end.row) + start.col.abs_diff(end.col);
        match self {
            Axis::Vertical | Axis::Horizontal => raw + 1,
            Axis::DiagSwNe | Axis::DiagSeNw => raw,
        }
    }

    /// Length of a contiguous line of `tokens` tokens, measured with
    /// [`Axis::span`]. Lone tokens do not form a run.
    pub fn length_of(self, tokens: usize) -> usize {
        if tokens < 2 {
            return 0;
        }
        match self {
            Axis::Vertical | Axis::Horizontal => tokens,
            Axis::DiagSwNe | Axis::DiagSeNw => 2 * (tokens - 1),
        }
    }
}
