//! Planning session configuration and fail-fast validation.
//!
//! Every tunable the planner consumes lives here: grid dimensions, footprint
//! shapes, budgets, edge definitions, the walkability policy, the scoring
//! strategy and its weight table, and the exploration parameters. A config is
//! validated once at session construction; nothing downstream re-checks it.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected before any planning work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: u8, cols: u8 },
    #[error("footprint ({size} cells) does not fit the {rows}x{cols} grid")]
    FootprintTooLarge { size: u8, rows: u8, cols: u8 },
    #[error("tower footprint and wall run must cover at least one cell")]
    EmptyFootprint,
    #[error("spawn and goal edges must differ, both are {0:?}")]
    ConflictingEdges(Edge),
    #[error("top_k must be at least 1")]
    ZeroTopK,
    #[error("board is {board_rows}x{board_cols} but config says {rows}x{cols}")]
    BoardMismatch {
        board_rows: u8,
        board_cols: u8,
        rows: u8,
        cols: u8,
    },
    #[error("epsilon must be within [0, 1], got {0}")]
    EpsilonOutOfRange(f32),
}

/// A vertical board edge. Movers spawn on one edge (one lane per row) and
/// try to reach the opposite edge.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
}

/// Which cell states block movement.
///
/// The reference behavior ships both policies and never reconciles them, so
/// both remain selectable here rather than one being declared correct.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum WalkPolicy {
    /// Only walls block; movers may pass through tower cells.
    WallsBlock,
    /// Only empty cells are walkable; towers block as well.
    EmptyOnly,
}

/// Which scoring strategy drives candidate selection.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum StrategyKind {
    LeastConstraining,
    Corridor,
    PathOverlap,
}

/// Weight table for score components. The benefit side is a weighted sum of
/// strategy-specific entries; `constraint` scales the future-options penalty
/// subtracted from every candidate.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub constraint: f32,
    pub lane_cut: f32,
    pub path_stretch: f32,
    pub coverage: f32,
    pub adjacency: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            constraint: 0.05,
            lane_cut: 6.0,
            path_stretch: 1.0,
            coverage: 1.0,
            adjacency: 0.5,
        }
    }
}

/// Full configuration for one planning session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub rows: u8,
    pub cols: u8,
    /// Edge length of the square tower footprint.
    pub tower_edge: u8,
    /// Cell count of a wall run.
    pub wall_run: u8,
    pub max_towers: u8,
    pub max_walls: u8,
    /// Chebyshev range within which a tower covers path tiles.
    pub tower_range: u8,
    pub spawn_edge: Edge,
    pub goal_edge: Edge,
    pub walk_policy: WalkPolicy,
    pub strategy: StrategyKind,
    pub weights: ScoreWeights,
    /// Probability of exploring among the top `top_k` candidates instead of
    /// exploiting the best score.
    pub epsilon: f32,
    pub top_k: usize,
    /// Half-width of the uniform jitter added to candidate scores. Zero
    /// disables jitter.
    pub jitter: f32,
    pub seed: u64,
    /// Hard cap on committed steps, independent of budgets.
    pub max_steps: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            tower_edge: DEFAULT_TOWER_EDGE,
            wall_run: DEFAULT_WALL_RUN,
            max_towers: DEFAULT_MAX_TOWERS,
            max_walls: DEFAULT_MAX_WALLS,
            tower_range: DEFAULT_TOWER_RANGE,
            spawn_edge: Edge::Right,
            goal_edge: Edge::Left,
            walk_policy: WalkPolicy::WallsBlock,
            strategy: StrategyKind::Corridor,
            weights: ScoreWeights::default(),
            epsilon: 0.1,
            top_k: 3,
            jitter: 0.01,
            seed: 0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl PlannerConfig {
    /// Fail-fast validation, run once at planner construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tower_edge == 0 || self.wall_run == 0 {
            return Err(ConfigError::EmptyFootprint);
        }
        if self.tower_edge > self.rows || self.tower_edge > self.cols {
            return Err(ConfigError::FootprintTooLarge {
                size: self.tower_edge,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.wall_run > self.rows.max(self.cols) {
            return Err(ConfigError::FootprintTooLarge {
                size: self.wall_run,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.spawn_edge == self.goal_edge {
            return Err(ConfigError::ConflictingEdges(self.spawn_edge));
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::EpsilonOutOfRange(self.epsilon));
        }
        Ok(())
    }

    fn edge_col(&self, edge: Edge) -> u8 {
        match edge {
            Edge::Left => 0,
            Edge::Right => self.cols - 1,
        }
    }

    /// Column movers spawn in (one lane per row).
    pub fn spawn_col(&self) -> u8 {
        self.edge_col(self.spawn_edge)
    }

    /// Column movers are trying to reach.
    pub fn goal_col(&self) -> u8 {
        self.edge_col(self.goal_edge)
    }
}
