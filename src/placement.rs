//! Placement proposals and the legality rules over them.
//!
//! A `Placement` is a small tagged value: a structure type plus the origin
//! cell of its footprint. Footprint shapes come from `PlannerConfig`, so the
//! same variant covers any configured tower edge or wall run length.
//!
//! Legality is a pure predicate (`can_place`), never an error: out-of-bounds,
//! overlapping, and over-budget proposals are simply filtered out during
//! candidate generation.

use crate::board::*;
use crate::config::*;
use crate::location::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An as-yet-uncommitted structure placement, identified by the origin
/// (top-left) cell of its footprint.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Placement {
    /// Square tower footprint, `tower_edge` cells per side.
    ArcherTower { origin: Location },
    /// `wall_run` contiguous cells extending rightward from the origin.
    WallHorizontal { origin: Location },
    /// `wall_run` contiguous cells extending downward from the origin.
    WallVertical { origin: Location },
}

impl Placement {
    pub fn origin(&self) -> Location {
        match self {
            Placement::ArcherTower { origin }
            | Placement::WallHorizontal { origin }
            | Placement::WallVertical { origin } => *origin,
        }
    }

    /// The cell state this placement writes into its footprint.
    pub fn cell_state(&self) -> CellState {
        match self {
            Placement::ArcherTower { .. } => CellState::Tower,
            Placement::WallHorizontal { .. } | Placement::WallVertical { .. } => CellState::Wall,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            Placement::WallHorizontal { .. } | Placement::WallVertical { .. }
        )
    }

    /// Footprint cells as signed coordinates. Cells may lie outside the grid;
    /// callers bounds-check against the board.
    pub fn footprint(&self, config: &PlannerConfig) -> Vec<(i16, i16)> {
        let row = self.origin().row() as i16;
        let col = self.origin().col() as i16;
        match self {
            Placement::ArcherTower { .. } => {
                let edge = config.tower_edge as i16;
                (0..edge)
                    .cartesian_product(0..edge)
                    .map(|(dr, dc)| (row + dr, col + dc))
                    .collect()
            }
            Placement::WallHorizontal { .. } => (0..config.wall_run as i16)
                .map(|dc| (row, col + dc))
                .collect(),
            Placement::WallVertical { .. } => (0..config.wall_run as i16)
                .map(|dr| (row + dr, col))
                .collect(),
        }
    }
}

/// True iff every footprint cell is in bounds and empty, and the relevant
/// budget has remaining capacity.
pub fn can_place(board: &Board, config: &PlannerConfig, placement: &Placement) -> bool {
    let budget_ok = if placement.is_wall() {
        board.walls_placed() < config.max_walls
    } else {
        board.towers_placed() < config.max_towers
    };
    if !budget_ok {
        return false;
    }

    placement.footprint(config).iter().all(|&(row, col)| {
        board.in_bounds(row, col) && board.is_empty_cell(Location::from_rc(row as u8, col as u8))
    })
}

/// Return a new board with the placement committed: every footprint cell set
/// to the placement's type and the matching budget counter bumped. The input
/// board is untouched, so trial evaluation can apply candidates freely.
///
/// The placement must be legal (`can_place`); generation only ever yields
/// legal candidates.
pub fn apply(board: &Board, config: &PlannerConfig, placement: &Placement) -> Board {
    debug_assert!(can_place(board, config, placement));

    let mut next = board.clone();
    let state = placement.cell_state();
    for (row, col) in placement.footprint(config) {
        next.set(Location::from_rc(row as u8, col as u8), state);
    }
    if placement.is_wall() {
        next.bump_walls();
    } else {
        next.bump_towers();
    }
    next
}

/// Exhaustively enumerate every legal placement on the board, gated per type
/// on remaining budget. Row-major origin order per type, so the result is
/// deterministic for a given board.
pub fn generate_candidates(board: &Board, config: &PlannerConfig) -> Vec<Placement> {
    let rows = board.rows();
    let cols = board.cols();
    let mut candidates = Vec::new();

    let push_legal = |placement: Placement, out: &mut Vec<Placement>| {
        if can_place(board, config, &placement) {
            out.push(placement);
        }
    };

    if board.towers_placed() < config.max_towers {
        let edge = config.tower_edge;
        for (row, col) in (0..=rows.saturating_sub(edge)).cartesian_product(0..=cols.saturating_sub(edge)) {
            push_legal(
                Placement::ArcherTower {
                    origin: Location::from_rc(row, col),
                },
                &mut candidates,
            );
        }
    }

    if board.walls_placed() < config.max_walls {
        let run = config.wall_run;
        for (row, col) in (0..rows).cartesian_product(0..=cols.saturating_sub(run)) {
            push_legal(
                Placement::WallHorizontal {
                    origin: Location::from_rc(row, col),
                },
                &mut candidates,
            );
        }
        for (row, col) in (0..=rows.saturating_sub(run)).cartesian_product(0..cols) {
            push_legal(
                Placement::WallVertical {
                    origin: Location::from_rc(row, col),
                },
                &mut candidates,
            );
        }
    }

    candidates
}

/// Count of all currently legal placements across both types. This is the
/// least-constraining-value denominator: candidates that shrink it least are
/// preferred.
pub fn count_future_options(board: &Board, config: &PlannerConfig) -> usize {
    generate_candidates(board, config).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn empty_board_candidate_counts() {
        let board = Board::new(9, 9);
        let candidates = generate_candidates(&board, &config());

        let towers = candidates.iter().filter(|p| !p.is_wall()).count();
        let walls = candidates.iter().filter(|p| p.is_wall()).count();
        // 2x2 towers: 8*8 origins; 4-cell walls: 9*6 per orientation.
        assert_eq!(towers, 64);
        assert_eq!(walls, 108);
    }

    #[test]
    fn rejects_out_of_bounds_footprints() {
        let board = Board::new(9, 9);
        let cfg = config();
        let tower = Placement::ArcherTower {
            origin: Location::from_rc(8, 8),
        };
        let wall = Placement::WallHorizontal {
            origin: Location::from_rc(0, 6),
        };
        assert!(!can_place(&board, &cfg, &tower));
        assert!(!can_place(&board, &cfg, &wall));
    }

    #[test]
    fn rejects_overlapping_footprints() {
        let cfg = config();
        let board = Board::new(9, 9);
        let wall = Placement::WallHorizontal {
            origin: Location::from_rc(4, 2),
        };
        let board = apply(&board, &cfg, &wall);

        let tower = Placement::ArcherTower {
            origin: Location::from_rc(3, 3),
        };
        assert!(!can_place(&board, &cfg, &tower));
    }

    #[test]
    fn apply_transitions_exactly_the_footprint() {
        let cfg = config();
        let board = Board::new(9, 9);
        let tower = Placement::ArcherTower {
            origin: Location::from_rc(2, 3),
        };
        let after = apply(&board, &cfg, &tower);

        assert_eq!(after.towers_placed(), 1);
        assert_eq!(after.count_cells(CellState::Tower), 4);
        for ((row, col), state) in after.snapshot() {
            let in_footprint = (2..4).contains(&row) && (3..5).contains(&col);
            if in_footprint {
                assert_eq!(state, CellState::Tower);
            } else {
                assert_eq!(state, CellState::Empty);
            }
        }
        // The input board is untouched.
        assert_eq!(board.count_cells(CellState::Empty), 81);
    }

    #[test]
    fn exhausted_wall_budget_yields_no_wall_candidates() {
        let cfg = config();
        let mut board = Board::new(9, 9);
        for row in [0, 2, 6] {
            let wall = Placement::WallHorizontal {
                origin: Location::from_rc(row, 0),
            };
            board = apply(&board, &cfg, &wall);
        }
        assert_eq!(board.walls_placed(), 3);

        let candidates = generate_candidates(&board, &cfg);
        assert!(candidates.iter().all(|p| !p.is_wall()));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn exhausted_budget_fails_can_place() {
        let cfg = PlannerConfig {
            max_towers: 1,
            ..config()
        };
        let board = Board::new(9, 9);
        let board = apply(
            &board,
            &cfg,
            &Placement::ArcherTower {
                origin: Location::from_rc(0, 0),
            },
        );
        let far_tower = Placement::ArcherTower {
            origin: Location::from_rc(6, 6),
        };
        assert!(!can_place(&board, &cfg, &far_tower));
    }
}
