//! Corridor strategy: lane-reduction-first.
//!
//! Walls are rewarded for cutting whole lanes, then for stretching the
//! reference route; with the default weight table the lane-cut term dominates,
//! so the planner herds movers into fewer corridors before lengthening them.
//! Towers are rewarded for covering the routes that remain.

use super::{covered_path_cells, reference_stretch};
use crate::board::Board;
use crate::path::LaneMetrics;
use crate::placement::Placement;
use crate::scoring::{ScoreContext, ScoreEntry, ScoringStrategy};

pub struct CorridorStrategy;

impl ScoringStrategy for CorridorStrategy {
    fn name(&self) -> &str {
        "corridor"
    }

    fn benefit(
        &self,
        ctx: &ScoreContext,
        candidate: &Placement,
        _trial: &Board,
        trial_lanes: &LaneMetrics,
    ) -> Vec<ScoreEntry> {
        let weights = &ctx.config.weights;

        if candidate.is_wall() {
            let lanes_cut = ctx
                .baseline
                .lanes
                .viable_lanes
                .saturating_sub(trial_lanes.viable_lanes) as f32;
            vec![
                ScoreEntry::new("lane_cut", lanes_cut, weights.lane_cut),
                ScoreEntry::new(
                    "path_stretch",
                    reference_stretch(ctx, trial_lanes),
                    weights.path_stretch,
                ),
            ]
        } else {
            vec![ScoreEntry::new(
                "coverage",
                covered_path_cells(ctx, candidate) as f32,
                weights.coverage,
            )]
        }
    }
}
