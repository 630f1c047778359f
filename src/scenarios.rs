//! Built-in graphs (compile-time literals).
//!
//! The small irregular graphs are the classic demonstration inputs; the named families are the
//! standard cop-win / robber-win examples used for sanity checks.

use crate::graph::{Graph, Vertex};

/// `{1: [1]}`: one vertex, already reflexive.
pub fn single_vertex() -> Graph {
    Graph::from_adjacency([(1, vec![1])])
}

/// `{1: [2, 3, 4], 3: [4]}`. Vertices 2 and 4 are dangling.
pub fn path_like() -> Graph {
    Graph::from_adjacency([(1, vec![2, 3, 4]), (3, vec![4])])
}

/// The "one pitfall" graph. Vertex 7 is dangling.
pub fn one_pitfall() -> Graph {
    Graph::from_adjacency([
        (1, vec![2, 3, 4]),
        (2, vec![3, 5, 7]),
        (3, vec![4, 5, 6]),
        (4, vec![6, 7]),
        (5, vec![6, 7]),
        (6, vec![7]),
    ])
}

/// `{0: [1, 2], 1: [2, 0], 2: [0, 1]}`: every vertex reaches every other in one step.
pub fn directed_triangle() -> Graph {
    Graph::from_adjacency([(0, vec![1, 2]), (1, vec![2, 0]), (2, vec![0, 1])])
}

/// Undirected path on `n` vertices `0..n`.
pub fn path(n: Vertex) -> Graph {
    let edges: Vec<_> = (1..n).map(|v| (v - 1, v)).collect();
    Graph::undirected(0..n, &edges)
}

/// Undirected cycle on `n` vertices `0..n` (needs `n >= 3` to be a simple cycle).
pub fn cycle(n: Vertex) -> Graph {
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    Graph::undirected(0..n, &edges)
}

/// Complete undirected graph on `n` vertices.
pub fn complete(n: Vertex) -> Graph {
    let edges: Vec<_> = (0..n)
        .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
        .collect();
    Graph::undirected(0..n, &edges)
}

/// Star with center 0 and `leaves` leaves.
pub fn star(leaves: Vertex) -> Graph {
    let edges: Vec<_> = (1..=leaves).map(|v| (0, v)).collect();
    Graph::undirected(0..=leaves, &edges)
}

/// Return a graph by name.
pub fn by_name(name: &str) -> Option<Graph> {
    match name {
        "single_vertex" => Some(single_vertex()),
        "path_like" => Some(path_like()),
        "one_pitfall" => Some(one_pitfall()),
        "directed_triangle" => Some(directed_triangle()),
        "path5" => Some(path(5)),
        "cycle4" => Some(cycle(4)),
        "cycle5" => Some(cycle(5)),
        "complete5" => Some(complete(5)),
        "star4" => Some(star(4)),
        _ => None,
    }
}

/// Names of all built-in graphs.
pub fn names() -> &'static [&'static str] {
    &[
        "single_vertex",
        "path_like",
        "one_pitfall",
        "directed_triangle",
        "path5",
        "cycle4",
        "cycle5",
        "complete5",
        "star4",
    ]
}
