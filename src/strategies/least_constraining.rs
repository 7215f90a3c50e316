//! Raw least-constraining-value strategy.
//!
//! Contributes no benefit entries at all: with benefit pinned to zero, the
//! engine's score reduces to `-constraint_weight * cost + jitter`, so the
//! planner favors whichever placement removes the fewest future options and
//! lets jitter break the near-ties.

use crate::board::Board;
use crate::path::LaneMetrics;
use crate::placement::Placement;
use crate::scoring::{ScoreContext, ScoreEntry, ScoringStrategy};

pub struct LeastConstrainingStrategy;

impl ScoringStrategy for LeastConstrainingStrategy {
    fn name(&self) -> &str {
        "least_constraining"
    }

    fn benefit(
        &self,
        _ctx: &ScoreContext,
        _candidate: &Placement,
        _trial: &Board,
        _trial_lanes: &LaneMetrics,
    ) -> Vec<ScoreEntry> {
        Vec::new()
    }
}
