//! Decide whether a graph is cop-win: whether one cop, moving alternately with one robber and
//! with perfect information, can always force a capture.
//!
//! The pipeline is normalize ([`Graph::normalized`]) → build the state graph
//! ([`arena::MoveGraph`]) → retrograde solve ([`solve`]) → check that no state is left unresolved.

pub mod arena;
pub mod config;
pub mod error;
pub mod graph;
pub mod resources;
pub mod scenarios;
pub mod solve;
pub mod state;

pub use config::{DanglingPolicy, Method, ResourceLimits, SolverConfig};
pub use error::SolveError;
pub use graph::{Graph, Vertex};
pub use solve::{CopWinReport, Length, LengthTable};
pub use state::{GameState, Turn};

use crate::arena::{MoveGraph, MoveGraphBuilder};
use crate::resources::{infallible, Budget, ResourceTracker, Unbounded};

/// True iff every state of the game on `graph` is a forced capture for the cop.
///
/// Dangling neighbors are kept ([`DanglingPolicy::Terminal`]). The input is not modified.
pub fn is_cop_win(graph: &Graph) -> bool {
    let normalized = graph.normalized();
    let moves = MoveGraph::build(&normalized);
    solve::relax::solve(&moves).is_cop_win()
}

/// Configurable form of [`is_cop_win`], returning a full report.
pub fn check_cop_win(graph: &Graph, config: &SolverConfig) -> Result<CopWinReport, SolveError> {
    graph.validate(config.dangling)?;
    let normalized = graph.normalized();
    match config.limits {
        Some(limits) => run(&normalized, config.method, &mut ResourceTracker::new(limits)),
        None => Ok(infallible(run(&normalized, config.method, &mut Unbounded))),
    }
}

fn run<B: Budget>(graph: &Graph, method: Method, budget: &mut B) -> Result<CopWinReport, B::Error> {
    let moves = MoveGraphBuilder::new(graph).try_build(budget)?;
    let table = solve::solve(&moves, method, budget)?;
    let report = table.report(method);
    tracing::info!(
        cop_win = report.cop_win,
        unresolved = report.unresolved,
        longest_capture = ?report.longest_capture,
        "solved"
    );
    Ok(report)
}
