//! Default battlefield parameters. All of these are overridable through
//! `PlannerConfig`; code outside this module must never hardcode them.

/// Default battlefield dimensions.
pub const DEFAULT_GRID_ROWS: u8 = 9;
pub const DEFAULT_GRID_COLS: u8 = 9;

/// Edge length of an archer tower footprint (towers occupy a square).
pub const DEFAULT_TOWER_EDGE: u8 = 2;

/// Number of contiguous cells a wall run occupies.
pub const DEFAULT_WALL_RUN: u8 = 4;

/// Per-type placement budgets.
pub const DEFAULT_MAX_TOWERS: u8 = 3;
pub const DEFAULT_MAX_WALLS: u8 = 3;

/// Chebyshev range within which a tower covers path tiles.
pub const DEFAULT_TOWER_RANGE: u8 = 3;

/// Upper bound on committed planning steps per session. Budgets normally
/// terminate planning first; this guards pathological configurations.
pub const DEFAULT_MAX_STEPS: usize = 64;

/// Neighbor offsets for 4-directional (cardinal) movement, as (row, col)
/// deltas. BFS tie-breaking depends on this ordering staying fixed.
pub const NEIGHBORS_4: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
