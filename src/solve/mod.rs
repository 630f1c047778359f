//! Retrograde solvers over a [`MoveGraph`].
//!
//! Both solvers label every state with the number of cop moves needed to force capture under
//! optimal play, or [`Length::Infinite`] when the robber can evade forever:
//! - [`relax`] repeats full passes over the table until nothing changes;
//! - [`attractor`] propagates backward from captured states in order of increasing length.
//!
//! The two produce identical tables.

pub mod attractor;
pub mod relax;
pub mod strategy;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arena::{MoveGraph, NodeId};
use crate::config::Method;
use crate::graph::Vertex;
use crate::resources::Budget;
use crate::state::{GameState, Turn};

/// Cop moves left until capture. Every finite length orders below `Infinite`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Finite(u32),
    Infinite,
}

impl Length {
    pub const ZERO: Length = Length::Finite(0);

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Length::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<u32> {
        match self {
            Length::Finite(n) => Some(n),
            Length::Infinite => None,
        }
    }

    /// One more cop move.
    #[inline]
    pub fn plus_one(self) -> Length {
        match self {
            Length::Finite(n) => Length::Finite(n.saturating_add(1)),
            Length::Infinite => Length::Infinite,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Finite(n) => write!(f, "{n}"),
            Length::Infinite => f.write_str("+inf"),
        }
    }
}

/// Starting table: captured and off-board states at 0, everything else unresolved.
pub(crate) fn initial_lengths(moves: &MoveGraph) -> Vec<Length> {
    moves
        .nodes
        .iter()
        .map(|n| {
            if n.off_board || n.state.is_capture() {
                Length::ZERO
            } else {
                Length::Infinite
            }
        })
        .collect()
}

/// A solved length table over one move graph.
#[derive(Clone, Debug)]
pub struct LengthTable<'m> {
    moves: &'m MoveGraph,
    lengths: Vec<Length>,
    passes: u64,
}

impl<'m> LengthTable<'m> {
    pub(crate) fn new(moves: &'m MoveGraph, lengths: Vec<Length>, passes: u64) -> Self {
        debug_assert_eq!(lengths.len(), moves.len());
        Self {
            moves,
            lengths,
            passes,
        }
    }

    #[inline]
    pub fn moves(&self) -> &'m MoveGraph {
        self.moves
    }

    /// Solver passes spent building this table.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[inline]
    pub fn length_of(&self, id: NodeId) -> Length {
        self.lengths[id]
    }

    /// Length of any state of the move graph, off-board targets included.
    pub fn get(&self, state: &GameState) -> Option<Length> {
        self.moves.id_of(state).map(|id| self.lengths[id])
    }

    /// On-board states with their lengths, in move-graph order.
    pub fn iter(&self) -> impl Iterator<Item = (GameState, Length)> + '_ {
        self.moves
            .nodes
            .iter()
            .zip(&self.lengths)
            .take(self.moves.board_len())
            .map(|(n, &l)| (n.state, l))
    }

    /// On-board states from which the robber evades forever.
    pub fn unresolved(&self) -> impl Iterator<Item = GameState> + '_ {
        self.iter()
            .filter(|(_, l)| !l.is_finite())
            .map(|(s, _)| s)
    }

    /// Every on-board state is a forced capture.
    pub fn is_cop_win(&self) -> bool {
        self.iter().all(|(_, l)| l.is_finite())
    }

    /// The largest finite length on the board.
    pub fn longest_capture(&self) -> Option<u32> {
        self.iter().filter_map(|(_, l)| l.finite()).max()
    }

    /// The smallest cop vertex from which the cop, moving first, catches a robber placed on any
    /// vertex.
    pub fn cop_start(&self) -> Option<Vertex> {
        let mut catches_all: BTreeMap<Vertex, bool> = BTreeMap::new();
        for (s, l) in self.iter().filter(|(s, _)| s.turn == Turn::Cop) {
            let entry = catches_all.entry(s.cop).or_insert(true);
            *entry &= l.is_finite();
        }
        catches_all
            .into_iter()
            .find_map(|(v, ok)| ok.then_some(v))
    }

    pub fn report(&self, method: Method) -> CopWinReport {
        CopWinReport {
            cop_win: self.is_cop_win(),
            standard_cop_win: self.cop_start().is_some(),
            method,
            states: self.moves.board_len(),
            off_board: self.moves.off_board_len(),
            unresolved: self.unresolved().count(),
            longest_capture: self.longest_capture(),
            passes: self.passes,
        }
    }
}

/// Summary of one solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CopWinReport {
    /// Every on-board state is a forced capture.
    pub cop_win: bool,
    /// Some cop start catches every robber start.
    pub standard_cop_win: bool,
    pub method: Method,
    pub states: usize,
    pub off_board: usize,
    pub unresolved: usize,
    pub longest_capture: Option<u32>,
    pub passes: u64,
}

/// Solve with the chosen method.
pub fn solve<'m, B: Budget>(
    moves: &'m MoveGraph,
    method: Method,
    budget: &mut B,
) -> Result<LengthTable<'m>, B::Error> {
    match method {
        Method::Relaxation => relax::Relaxation::new(moves).try_run(budget),
        Method::Attractor => attractor::try_solve(moves, budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_lengths_order_below_infinite() {
        assert!(Length::Finite(u32::MAX) < Length::Infinite);
        assert!(Length::Finite(1) < Length::Finite(2));
        assert_eq!(Length::Infinite.plus_one(), Length::Infinite);
        assert_eq!(Length::ZERO.plus_one(), Length::Finite(1));
        assert_eq!(
            [Length::Finite(3), Length::Infinite, Length::Finite(1)]
                .into_iter()
                .min(),
            Some(Length::Finite(1))
        );
    }

    #[test]
    fn length_display() {
        assert_eq!(Length::Finite(4).to_string(), "4");
        assert_eq!(Length::Infinite.to_string(), "+inf");
    }
}
