//! Connectivity and shortest-path oracle over a board snapshot.
//!
//! Everything here is a pure function of the board; the scoring engine calls
//! these repeatedly on trial boards, once per candidate. BFS is 4-directional
//! with a fixed neighbor order, so equal-length paths always tie-break the
//! same way.

use crate::board::*;
use crate::config::*;
use crate::constants::NEIGHBORS_4;
use crate::location::*;
use fnv::FnvHashSet;
use pathfinding::directed::bfs::bfs;

/// Whether a mover may stand on the given cell under the active policy.
pub fn walkable(board: &Board, policy: WalkPolicy, loc: Location) -> bool {
    match policy {
        WalkPolicy::WallsBlock => board.get(loc) != CellState::Wall,
        WalkPolicy::EmptyOnly => board.get(loc) == CellState::Empty,
    }
}

fn walkable_neighbors(board: &Board, policy: WalkPolicy, loc: Location) -> Vec<Location> {
    NEIGHBORS_4
        .iter()
        .filter_map(|&(dr, dc)| {
            let row = loc.row() as i16 + dr as i16;
            let col = loc.col() as i16 + dc as i16;
            if board.in_bounds(row, col) {
                let next = Location::from_rc(row as u8, col as u8);
                walkable(board, policy, next).then_some(next)
            } else {
                None
            }
        })
        .collect()
}

/// BFS from `start` to the first cell satisfying `success`. A start the
/// mover cannot stand on has no path at all.
fn search(
    board: &Board,
    policy: WalkPolicy,
    start: Location,
    success: impl FnMut(&Location) -> bool,
) -> Option<Vec<Location>> {
    if !walkable(board, policy, start) {
        return None;
    }
    bfs(
        &start,
        |&loc| walkable_neighbors(board, policy, loc),
        success,
    )
}

/// Shortest path between two cells, start and goal inclusive, or `None` if
/// the goal is unreachable.
pub fn shortest_path(
    board: &Board,
    policy: WalkPolicy,
    start: Location,
    goal: Location,
) -> Option<Vec<Location>> {
    search(board, policy, start, |&loc| loc == goal)
}

/// Shortest route for one lane: from the spawn-edge cell of `spawn_row` to
/// any goal-edge cell.
pub fn lane_path(board: &Board, config: &PlannerConfig, spawn_row: u8) -> Option<Vec<Location>> {
    let start = Location::from_rc(spawn_row, config.spawn_col());
    let goal_col = config.goal_col();
    search(board, config.walk_policy, start, |&loc| {
        loc.col() == goal_col
    })
}

/// Number of spawn-edge rows from which the goal edge is still reachable.
pub fn count_viable_lanes(board: &Board, config: &PlannerConfig) -> usize {
    (0..board.rows())
        .filter(|&row| lane_path(board, config, row).is_some())
        .count()
}

/// Aggregate lane picture used by the scoring strategies.
#[derive(Clone, Debug)]
pub struct LaneMetrics {
    /// Lanes with a traversable route to the goal edge.
    pub viable_lanes: usize,
    /// Union of all lane path tiles (tower coverage is measured against this).
    pub path_cells: FnvHashSet<Location>,
    /// Path length of the reference lane (middle spawn row), if traversable.
    pub reference_len: Option<usize>,
}

/// Run every lane once and collect the aggregate metrics.
pub fn analyze_lanes(board: &Board, config: &PlannerConfig) -> LaneMetrics {
    let reference_row = board.rows() / 2;
    let mut viable_lanes = 0;
    let mut path_cells = FnvHashSet::default();
    let mut reference_len = None;

    for row in 0..board.rows() {
        if let Some(path) = lane_path(board, config, row) {
            viable_lanes += 1;
            if row == reference_row {
                reference_len = Some(path.len());
            }
            path_cells.extend(path);
        }
    }

    LaneMetrics {
        viable_lanes,
        path_cells,
        reference_len,
    }
}
