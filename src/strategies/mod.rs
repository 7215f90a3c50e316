//! The shipped scoring strategies.
//!
//! The reference behavior contains three divergent weighting schemes that
//! were never reconciled. Each is kept as an independently testable strategy
//! behind `ScoringStrategy`; which one is authoritative remains a product
//! decision, selected per session via `StrategyKind`.

pub mod corridor;
pub mod least_constraining;
pub mod path_overlap;

pub use corridor::CorridorStrategy;
pub use least_constraining::LeastConstrainingStrategy;
pub use path_overlap::PathOverlapStrategy;

use crate::config::StrategyKind;
use crate::path::LaneMetrics;
use crate::placement::Placement;
use crate::scoring::{ScoreContext, ScoringStrategy};

/// Instantiate the strategy selected by configuration.
pub fn strategy_for(kind: StrategyKind) -> Box<dyn ScoringStrategy> {
    match kind {
        StrategyKind::LeastConstraining => Box::new(LeastConstrainingStrategy),
        StrategyKind::Corridor => Box::new(CorridorStrategy),
        StrategyKind::PathOverlap => Box::new(PathOverlapStrategy),
    }
}

/// Count of baseline path tiles within the configured Chebyshev range of any
/// footprint cell of the candidate. This is the tower coverage measure: how
/// much of the movers' current routes the tower can shoot at.
pub(crate) fn covered_path_cells(ctx: &ScoreContext, candidate: &Placement) -> usize {
    let footprint = candidate.footprint(ctx.config);
    let range = ctx.config.tower_range as i16;
    ctx.baseline
        .lanes
        .path_cells
        .iter()
        .filter(|cell| {
            footprint.iter().any(|&(row, col)| {
                let dr = (cell.row() as i16 - row).abs();
                let dc = (cell.col() as i16 - col).abs();
                dr.max(dc) <= range
            })
        })
        .count()
}

/// How much longer the reference lane got on the trial board, in cells.
/// Zero when the reference lane is severed on either board; lane-count terms
/// account for severing.
pub(crate) fn reference_stretch(ctx: &ScoreContext, trial_lanes: &LaneMetrics) -> f32 {
    match (
        ctx.baseline.lanes.reference_len,
        trial_lanes.reference_len,
    ) {
        (Some(base), Some(trial)) => (trial as f32 - base as f32).max(0.0),
        _ => 0.0,
    }
}

/// Count of footprint cells adjacent (Chebyshev distance 1) to an
/// already-placed tower on the pre-candidate board.
pub(crate) fn tower_adjacency(ctx: &ScoreContext, candidate: &Placement) -> usize {
    use crate::board::CellState;
    use crate::location::Location;

    candidate
        .footprint(ctx.config)
        .iter()
        .filter(|&&(row, col)| {
            (-1..=1i16).any(|dr| {
                (-1..=1i16).any(|dc| {
                    let (nr, nc) = (row + dr, col + dc);
                    ctx.board.in_bounds(nr, nc)
                        && ctx.board.get(Location::from_rc(nr as u8, nc as u8))
                            == CellState::Tower
                })
            })
        })
        .count()
}
