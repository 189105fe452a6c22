//! Runs of same-player tokens along one axis, kept in an arena so tokens can
//! hold plain [`RunId`] back-references that a merge repoints in one pass.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Index;

use super::axis::Axis;
use super::board::Position;
use super::token::TokenId;

/// Handle of a run in a [`RunArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub usize);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A token together with where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub token: TokenId,
    pub pos: Position,
}

impl Member {
    pub fn new(token: TokenId, pos: Position) -> Self {
        Member { token, pos }
    }
}

/// A maximal contiguous line of one player's tokens on one axis.
///
/// `start` and `end` are the extremes along [`Axis::principal`], and
/// `members` is kept in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    axis: Axis,
    start: Member,
    end: Member,
    members: VecDeque<TokenId>,
}

impl Run {
    /// A two-token run. The order of `a` and `b` does not matter.
    pub fn pair(axis: Axis, a: Member, b: Member) -> Self {
        let (start, end) = if axis.principal(a.pos) <= axis.principal(b.pos) {
            (a, b)
        } else {
            (b, a)
        };
        Run {
            axis,
            start,
            end,
            members: VecDeque::from([start.token, end.token]),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn start(&self) -> Member {
        self.start
    }

    pub fn end(&self) -> Member {
        self.end
    }

    pub fn members(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Length as measured by the win check, see [`Axis::span`].
    pub fn span(&self) -> usize {
        self.axis.span(self.start.pos, self.end.pos)
    }

    /// Grow the run by one token adjacent to either end.
    pub fn extend(&mut self, member: Member) {
        let at = self.axis.principal(member.pos);
        if at < self.axis.principal(self.start.pos) {
            self.start = member;
            self.members.push_front(member.token);
        } else {
            self.end = member;
            self.members.push_back(member.token);
        }
    }

    /// Join two runs that meet end to end. The run whose start comes first
    /// along the axis supplies the new start.
    pub fn merge(a: Run, b: Run) -> Run {
        debug_assert_eq!(a.axis, b.axis);
        let axis = a.axis;
        let (mut lower, higher) =
            if axis.principal(a.start.pos) < axis.principal(b.start.pos) {
                (a, b)
            } else {
                (b, a)
            };
        lower.end = higher.end;
        lower.members.extend(higher.members);
        lower
    }
}

/// Owner of every run in a game. Retired slots stay `None` so ids are never
/// reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArena {
    slots: Vec<Option<Run>>,
    live: usize,
}

impl RunArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, axis: Axis, a: Member, b: Member) -> RunId {
        self.insert(Run::pair(axis, a, b))
    }

    pub fn get(&self, id: RunId) -> Option<&Run> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Add `member` to run `id` and return the new span.
    pub fn extend(&mut self, id: RunId, member: Member) -> usize {
        let run = self.slot_mut(id);
        run.extend(member);
        run.span()
    }

    /// Retire `a` and `b` and store their union under a fresh id. Callers
    /// must repoint the members' back-references to the returned id.
    pub fn merge(&mut self, a: RunId, b: RunId) -> RunId {
        let first = self.retire(a);
        let second = self.retire(b);
        self.insert(Run::merge(first, second))
    }

    /// Number of runs not yet retired.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Every run not yet retired, with its id.
    pub fn iter(&self) -> impl Iterator<Item = (RunId, &Run)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|run| (RunId(i), run)))
    }

    fn insert(&mut self, run: Run) -> RunId {
        self.slots.push(Some(run));
        self.live += 1;
        RunId(self.slots.len() - 1)
    }

    fn retire(&mut self, id: RunId) -> Run {
        let run = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("run {id} was already retired"));
        self.live -= 1;
        run
    }

    fn slot_mut(&mut self, id: RunId) -> &mut Run {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("run {id} was retired"))
    }
}

impl Index<RunId> for RunArena {
    type Output = Run;

    fn index(&self, id: RunId) -> &Run {
        self.get(id)
            .unwrap_or_else(|| panic!("run {id} was retired"))
    }
}
