use crate::arena::MoveGraph;
use crate::resources::{infallible, Budget, Unbounded};
use crate::solve::{initial_lengths, Length, LengthTable};
use crate::state::Turn;

/// Fixed-point relaxation over the whole table.
///
/// Each pass reads the table as the previous pass left it and resolves every unresolved
/// on-board state that now has an answer:
/// - cop to move: `1 + min` over successors;
/// - robber to move: `max` over successors, no increment.
///
/// A state with no successors stays unresolved. Lengths only ever go from `Infinite` to a
/// finite value, once, so the iteration stops after at most one pass per state.
#[derive(Clone, Debug)]
pub struct Relaxation<'m> {
    moves: &'m MoveGraph,
    lengths: Vec<Length>,
    passes: u64,
    converged: bool,
}

impl<'m> Relaxation<'m> {
    pub fn new(moves: &'m MoveGraph) -> Self {
        Self {
            moves,
            lengths: initial_lengths(moves),
            passes: 0,
            converged: false,
        }
    }

    /// The table as of the last pass, indexed by node id.
    #[inline]
    pub fn lengths(&self) -> &[Length] {
        &self.lengths
    }

    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Run one pass. Returns the number of states resolved by it.
    pub fn pass(&mut self) -> usize {
        let nodes = &self.moves.nodes;
        let lengths = &self.lengths;

        let mut updates: Vec<(usize, Length)> = Vec::new();
        for (id, node) in nodes.iter().enumerate().take(self.moves.board_len()) {
            if lengths[id].is_finite() {
                continue;
            }
            let succ = node.succ.iter().map(|&s| lengths[s]);
            let next = match node.state.turn {
                Turn::Cop => succ.min().map_or(Length::Infinite, Length::plus_one),
                Turn::Robber => succ.max().unwrap_or(Length::Infinite),
            };
            if next.is_finite() {
                updates.push((id, next));
            }
        }

        for &(id, l) in &updates {
            self.lengths[id] = l;
        }
        self.passes += 1;
        if updates.is_empty() {
            self.converged = true;
        }
        updates.len()
    }

    /// Pass until a pass changes nothing.
    pub fn try_run<B: Budget>(mut self, budget: &mut B) -> Result<LengthTable<'m>, B::Error> {
        while !self.converged {
            budget.bump_passes("relaxation", 1)?;
            let resolved = self.pass();
            tracing::debug!(pass = self.passes, resolved, "relaxation pass");
        }
        tracing::info!(
            states = self.moves.board_len(),
            passes = self.passes,
            "relaxation converged"
        );
        Ok(self.into_table())
    }

    pub fn into_table(self) -> LengthTable<'m> {
        LengthTable::new(self.moves, self.lengths, self.passes)
    }
}

/// Solve by relaxation without a budget.
pub fn solve(moves: &MoveGraph) -> LengthTable<'_> {
    infallible(Relaxation::new(moves).try_run(&mut Unbounded))
}
