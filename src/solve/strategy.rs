//! Strategy extraction from a solved table.
//!
//! The solvers only compute lengths. These helpers turn a table into concrete moves: the cop
//! steps to a successor of minimal length, the robber to one of maximal length. Ties go to the
//! first successor in move-graph order, so the choice is deterministic.

use crate::solve::LengthTable;
use crate::state::{GameState, Turn};

fn best_successor(
    table: &LengthTable<'_>,
    state: &GameState,
    turn: Turn,
) -> Option<GameState> {
    if state.turn != turn || state.is_capture() {
        return None;
    }
    let moves = table.moves();
    let id = moves.id_of(state).filter(|&id| !moves.is_off_board(id))?;

    let mut best: Option<(usize, _)> = None;
    for &s in &moves.nodes[id].succ {
        let l = table.length_of(s);
        let better = match best {
            None => true,
            Some((_, b)) => match turn {
                Turn::Cop => l < b,
                Turn::Robber => l > b,
            },
        };
        if better {
            best = Some((s, l));
        }
    }
    best.map(|(s, _)| moves.state(s))
}

/// The cop's optimal move from a cop-to-move state that is not yet a capture.
pub fn cop_move(table: &LengthTable<'_>, state: &GameState) -> Option<GameState> {
    best_successor(table, state, Turn::Cop)
}

/// The robber's most evasive move from a robber-to-move state that is not yet a capture.
pub fn robber_move(table: &LengthTable<'_>, state: &GameState) -> Option<GameState> {
    best_successor(table, state, Turn::Robber)
}

/// Optimal play from `start` until capture (or until play leaves the board).
///
/// Returns `None` when `start` is not a state of the table or the robber escapes from it. The
/// returned line starts with `start` and contains exactly as many non-final cop-to-move states as
/// the table's length for `start`.
pub fn principal_line(table: &LengthTable<'_>, start: &GameState) -> Option<Vec<GameState>> {
    if !table.get(start)?.is_finite() {
        return None;
    }
    let moves = table.moves();

    let mut line = vec![*start];
    let mut cur = *start;
    loop {
        let id = moves.id_of(&cur)?;
        if cur.is_capture() || moves.is_off_board(id) {
            return Some(line);
        }
        cur = match cur.turn {
            Turn::Cop => cop_move(table, &cur)?,
            Turn::Robber => robber_move(table, &cur)?,
        };
        line.push(cur);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::MoveGraph;
    use crate::graph::Graph;
    use crate::solve::{relax, Length};

    #[test]
    fn cop_walks_down_the_path() {
        let g = Graph::undirected(0..4, &[(0, 1), (1, 2), (2, 3)]).normalized();
        let moves = MoveGraph::build(&g);
        let table = relax::solve(&moves);

        let start = GameState::new(0, 3, Turn::Cop);
        assert_eq!(
            cop_move(&table, &start),
            Some(GameState::new(1, 3, Turn::Robber))
        );
        assert_eq!(robber_move(&table, &start), None);

        let line = principal_line(&table, &start).unwrap();
        assert_eq!(line.first(), Some(&start));
        assert!(line.last().unwrap().is_capture());
        let cop_moves = line
            .iter()
            .filter(|s| s.turn == Turn::Cop && !s.is_capture())
            .count() as u32;
        assert_eq!(table.get(&start), Some(Length::Finite(cop_moves)));
    }

    #[test]
    fn no_line_from_a_robber_win() {
        let g = Graph::undirected(0..4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).normalized();
        let moves = MoveGraph::build(&g);
        let table = relax::solve(&moves);
        assert!(principal_line(&table, &GameState::new(0, 2, Turn::Cop)).is_none());
    }
}
