//! Solver configuration.
//!
//! [`SolverConfig`] selects the solving method, how dangling neighbors are treated, and optional
//! resource budgets. It deserializes from JSON so the demo binary can load it from a file; every
//! field has a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Which retrograde solver computes the length table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Repeated full-table passes until nothing changes.
    #[default]
    Relaxation,
    /// Backward 0-1 BFS from captured states over predecessor lists.
    Attractor,
}

/// What to do with a neighbor that has no adjacency entry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Keep the graph. Moves onto a dangling vertex lead off the board, and such states count as
    /// resolved at length 0.
    #[default]
    Terminal,
    /// Fail with [`SolveError::DanglingNeighbor`].
    Reject,
}

/// Search budgets used to bound memory/time consumption.
///
/// - `max_states`: number of on-board states admitted to the move graph
/// - `max_edges`: number of generated moves
/// - `max_passes`: relaxation passes (the attractor solver charges one pass per run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_passes: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 2_000_000,
            max_edges: 50_000_000,
            max_passes: 100_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub method: Method,
    pub dangling: DanglingPolicy,
    /// `None` runs unbudgeted.
    pub limits: Option<ResourceLimits>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_dangling(mut self, policy: DanglingPolicy) -> Self {
        self.dangling = policy;
        self
    }

    pub fn with_limits(mut self, limits: Option<ResourceLimits>) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, SolveError> {
        Ok(serde_json::from_str(s)?)
    }
}
