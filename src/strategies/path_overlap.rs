//! Path-overlap strategy.
//!
//! Towers are rewarded for the number of current route tiles inside their
//! firing range. Walls are rewarded for stretching the reference route and
//! for hugging already-placed towers, screening them from the movers they
//! are shooting at.

use super::{covered_path_cells, reference_stretch, tower_adjacency};
use crate::board::Board;
use crate::path::LaneMetrics;
use crate::placement::Placement;
use crate::scoring::{ScoreContext, ScoreEntry, ScoringStrategy};

pub struct PathOverlapStrategy;

impl ScoringStrategy for PathOverlapStrategy {
    fn name(&self) -> &str {
        "path_overlap"
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
            vec![
                ScoreEntry::new(
                    "path_stretch",
                    reference_stretch(ctx, trial_lanes),
                    weights.path_stretch,
                ),
                ScoreEntry::new(
                    "adjacency",
                    tower_adjacency(ctx, candidate) as f32,
                    weights.adjacency,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;
    use crate::location::Location;
    use crate::path::analyze_lanes;
    use crate::placement::apply;
    use crate::scoring::Baseline;

    fn benefit_for(config: &PlannerConfig, board: &Board, candidate: Placement) -> Vec<ScoreEntry> {
        let baseline = Baseline::compute(board, config);
        let ctx = ScoreContext {
            board,
            config,
            baseline: &baseline,
        };
        let trial = apply(board, config, &candidate);
        let trial_lanes = analyze_lanes(&trial, config);
        PathOverlapStrategy.benefit(&ctx, &candidate, &trial, &trial_lanes)
    }

    #[test]
    fn walls_touching_towers_score_adjacency() {
        let config = PlannerConfig::default();
        let board = Board::new(9, 9);
        let board = apply(
            &board,
            &config,
            &Placement::ArcherTower {
                origin: Location::from_rc(3, 3),
            },
        );

        // Horizontal wall directly above the tower: cells (2,2)..(2,5);
        // (2,2) through (2,5) all touch the 2x2 footprint at rows 3..=4.
        let hugging = Placement::WallHorizontal {
            origin: Location::from_rc(2, 2),
        };
        let entries = benefit_for(&config, &board, hugging);
        let adjacency = entries.iter().find(|e| e.name == "adjacency").unwrap();
        assert_eq!(adjacency.score, 4.0);

        // A wall far from the tower scores nothing for adjacency.
        let distant = Placement::WallHorizontal {
            origin: Location::from_rc(7, 5),
        };
        let entries = benefit_for(&config, &board, distant);
        let adjacency = entries.iter().find(|e| e.name == "adjacency").unwrap();
        assert_eq!(adjacency.score, 0.0);
    }

    #[test]
    fn corner_tower_covers_fewer_tiles_than_central() {
        let config = PlannerConfig::default();
        let board = Board::new(9, 9);
        let central = benefit_for(
            &config,
            &board,
            Placement::ArcherTower {
                origin: Location::from_rc(3, 3),
            },
        );
        let corner = benefit_for(
            &config,
            &board,
            Placement::ArcherTower {
                origin: Location::from_rc(0, 0),
            },
        );
        assert!(central[0].score > corner[0].score);
    }
}
