//! The move graph: game states as nodes, single legal moves as edges.

pub mod enumerate;
pub mod graph;

pub use graph::{MoveGraph, MoveGraphBuilder, Node, NodeId};
