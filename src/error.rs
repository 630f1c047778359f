use thiserror::Error;

use crate::graph::Vertex;
use crate::resources::ResourceCounts;

/// Structured errors returned by the configurable solve path.
///
/// The plain [`crate::is_cop_win`] query never produces one.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A neighbor list names a vertex with no adjacency entry, under the strict policy.
    #[error("vertex {vertex} lists neighbor {neighbor}, which has no adjacency entry")]
    DanglingNeighbor { vertex: Vertex, neighbor: Vertex },

    /// A configured resource limit was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); {counts}")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },

    #[error("invalid solver config: {0}")]
    Config(#[from] serde_json::Error),
}
