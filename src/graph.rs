use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DanglingPolicy;
use crate::error::SolveError;

pub type Vertex = i64;

/// An adjacency-list graph: every key vertex maps to its outgoing neighbors.
///
/// Neighbor order and duplicates carry no meaning. Keys iterate in ascending order, which fixes
/// the numbering of states in [`crate::arena::MoveGraph`].
///
/// A vertex that only ever appears inside a neighbor list is *dangling*: it has no adjacency
/// entry of its own, and normalization leaves it that way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adj: BTreeMap<Vertex, Vec<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(vertex, neighbors)` pairs. A repeated vertex extends its neighbor list.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, N)>,
        N: IntoIterator<Item = Vertex>,
    {
        let mut g = Self::new();
        for (v, ns) in entries {
            g.insert(v, ns);
        }
        g
    }

    /// Undirected graph from an edge list: each edge `{a, b}` is stored in both directions.
    pub fn undirected(vertices: impl IntoIterator<Item = Vertex>, edges: &[(Vertex, Vertex)]) -> Self {
        let mut g = Self::new();
        for v in vertices {
            g.adj.entry(v).or_default();
        }
        for &(a, b) in edges {
            g.add_edge(a, b);
            g.add_edge(b, a);
        }
        g
    }

    pub fn insert(&mut self, vertex: Vertex, neighbors: impl IntoIterator<Item = Vertex>) {
        self.adj.entry(vertex).or_default().extend(neighbors);
    }

    /// Add the directed edge `from -> to`. Only `from` becomes a key.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) {
        self.adj.entry(from).or_default().push(to);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.adj.contains_key(&v)
    }

    /// Key vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adj.keys().copied()
    }

    pub fn neighbors(&self, v: Vertex) -> Option<&[Vertex]> {
        self.adj.get(&v).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Vertex])> + '_ {
        self.adj.iter().map(|(&v, ns)| (v, ns.as_slice()))
    }

    /// Give every key vertex a self-loop, so staying put is always a legal move.
    pub fn normalize(&mut self) {
        for (&v, ns) in self.adj.iter_mut() {
            if !ns.contains(&v) {
                ns.push(v);
            }
        }
    }

    /// Like [`Graph::normalize`], leaving `self` untouched.
    pub fn normalized(&self) -> Graph {
        let mut g = self.clone();
        g.normalize();
        g
    }

    pub fn is_reflexive(&self) -> bool {
        self.adj.iter().all(|(v, ns)| ns.contains(v))
    }

    /// Edges `(vertex, neighbor)` whose target has no adjacency entry, in key order.
    pub fn dangling_edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adj.iter().flat_map(move |(&v, ns)| {
            ns.iter()
                .copied()
                .filter(move |n| !self.adj.contains_key(n))
                .map(move |n| (v, n))
        })
    }

    /// Check the graph against a dangling-neighbor policy.
    pub fn validate(&self, policy: DanglingPolicy) -> Result<(), SolveError> {
        match policy {
            DanglingPolicy::Terminal => Ok(()),
            DanglingPolicy::Reject => match self.dangling_edges().next() {
                Some((vertex, neighbor)) => Err(SolveError::DanglingNeighbor { vertex, neighbor }),
                None => Ok(()),
            },
        }
    }
}

impl FromIterator<(Vertex, Vec<Vertex>)> for Graph {
    fn from_iter<T: IntoIterator<Item = (Vertex, Vec<Vertex>)>>(iter: T) -> Self {
        Self::from_adjacency(iter)
    }
}
