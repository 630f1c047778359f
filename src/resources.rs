//! Resource tracking for move-graph construction and solving.
//!
//! The state space grows as |V|² and the edge count as |V|² · degree. Builders and solvers are
//! generic over a [`Budget`]: [`ResourceTracker`] enforces [`ResourceLimits`] and fails with
//! [`SolveError::LimitExceeded`], while [`Unbounded`] never fails, which lets the infallible entry
//! points discharge the error type statically.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

use crate::config::ResourceLimits;
use crate::error::SolveError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Running counters tracked during a solve.
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
    pub passes: u64,
}

impl fmt::Display for ResourceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "counts(states={}, edges={}, passes={})",
            self.states, self.edges, self.passes
        )
    }
}

/// Something that can be charged for work as a solve progresses.
pub trait Budget {
    type Error;

    fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), Self::Error>;
    fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), Self::Error>;
    fn bump_passes(&mut self, stage: &'static str, delta: u64) -> Result<(), Self::Error>;
}

/// A budget that never runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Budget for Unbounded {
    type Error = Infallible;

    #[inline]
    fn bump_states(&mut self, _stage: &'static str, _delta: usize) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn bump_edges(&mut self, _stage: &'static str, _delta: usize) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn bump_passes(&mut self, _stage: &'static str, _delta: u64) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a solve.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SolveError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SolveError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }
}

impl Budget for ResourceTracker {
    type Error = SolveError;

    fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SolveError> {
        let limit = self.limits.max_states as u64;
        self.bump(stage, "states", delta as u64, limit, |c| &mut c.states)
    }

    fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SolveError> {
        let limit = self.limits.max_edges as u64;
        self.bump(stage, "edges", delta as u64, limit, |c| &mut c.edges)
    }

    fn bump_passes(&mut self, stage: &'static str, delta: u64) -> Result<(), SolveError> {
        let limit = self.limits.max_passes;
        self.bump(stage, "passes", delta, limit, |c| &mut c.passes)
    }
}

/// Discharge the error of an [`Unbounded`] run.
#[inline]
pub(crate) fn infallible<T>(r: Result<T, Infallible>) -> T {
    r.unwrap_or_else(|never| match never {})
}
