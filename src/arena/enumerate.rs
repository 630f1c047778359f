use crate::graph::{Graph, Vertex};
use crate::state::{GameState, Turn};

/// Number of on-board states for a graph: one per ordered vertex pair and turn.
#[inline]
pub fn board_state_count(graph: &Graph) -> usize {
    let n = graph.vertex_count();
    2 * n * n
}

/// Enumerate every on-board state of `graph`.
///
/// Order is fixed: cop vertex ascending, then robber vertex ascending, and for each pair the
/// cop-to-move state followed by the robber-to-move state. Captured pairs are included.
pub fn board_states(graph: &Graph) -> impl Iterator<Item = GameState> + '_ {
    ordered_pairs(graph).flat_map(|(cop, robber)| {
        [
            GameState::new(cop, robber, Turn::Cop),
            GameState::new(cop, robber, Turn::Robber),
        ]
    })
}

/// All ordered pairs `(x, y)` of key vertices, `x` major.
pub fn ordered_pairs(graph: &Graph) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
    graph
        .vertices()
        .flat_map(move |x| graph.vertices().map(move |y| (x, y)))
}
