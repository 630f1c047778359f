use std::collections::VecDeque;

use crate::arena::MoveGraph;
use crate::resources::{infallible, Budget, Unbounded};
use crate::solve::{initial_lengths, Length, LengthTable};
use crate::state::Turn;

/// Backward attractor computation from the captured states.
///
/// States are finalized in nondecreasing order of length (a 0-1 BFS: a cop move costs one, a
/// robber move costs nothing):
/// - a cop-to-move predecessor is resolved by the first successor popped, at `length + 1`;
/// - a robber-to-move predecessor is resolved when its last unresolved successor is popped, at
///   that successor's length.
///
/// Produces exactly the table [`crate::solve::relax`] converges to.
pub fn try_solve<'m, B: Budget>(
    moves: &'m MoveGraph,
    budget: &mut B,
) -> Result<LengthTable<'m>, B::Error> {
    budget.bump_passes("attractor", 1)?;

    let n = moves.len();
    let mut lengths = initial_lengths(moves);

    // For robber nodes: number of successors not yet popped.
    let mut rem_robber: Vec<u32> = vec![0; n];
    for id in 0..moves.board_len() {
        let node = &moves.nodes[id];
        if node.state.turn == Turn::Robber {
            rem_robber[id] = node.succ.len() as u32;
        }
    }

    let mut q: VecDeque<usize> = VecDeque::new();
    for (id, l) in lengths.iter().enumerate() {
        if l.is_finite() {
            q.push_back(id);
        }
    }

    let mut resolved = 0usize;
    while let Some(v) = q.pop_front() {
        let d = lengths[v];
        for &p in &moves.nodes[v].pred {
            if lengths[p].is_finite() {
                continue;
            }
            match moves.nodes[p].state.turn {
                Turn::Cop => {
                    lengths[p] = d.plus_one();
                    q.push_back(p);
                    resolved += 1;
                }
                Turn::Robber => {
                    if rem_robber[p] == 0 {
                        continue;
                    }
                    rem_robber[p] -= 1;
                    if rem_robber[p] == 0 {
                        lengths[p] = d;
                        q.push_front(p);
                        resolved += 1;
                    }
                }
            }
        }
    }

    tracing::info!(
        states = moves.board_len(),
        resolved,
        unresolved = lengths.iter().filter(|l| **l == Length::Infinite).count(),
        "attractor finished"
    );
    Ok(LengthTable::new(moves, lengths, 1))
}

/// Solve by backward attraction without a budget.
pub fn solve(moves: &MoveGraph) -> LengthTable<'_> {
    infallible(try_solve(moves, &mut Unbounded))
}
