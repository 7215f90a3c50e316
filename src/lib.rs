//! Adversarial placement planner for grid battlefields.
//!
//! Given a fixed grid, the planner decides where to put blocking walls and
//! ranged towers so as to manipulate which routes an opposing mover can take,
//! under per-type placement budgets, while never fully sealing the board.
//! Hosts call [`planner::plan_turn`] once per preparation phase and consume
//! the frozen [`planner::PlanOutcome`].

pub mod board;
pub mod config;
pub mod constants;
pub mod location;
pub mod path;
pub mod placement;
pub mod planner;
pub mod scoring;
pub mod strategies;

pub use board::{Board, CellState};
pub use config::{
    ConfigError, Edge, PlannerConfig, ScoreWeights, StrategyKind, WalkPolicy,
};
pub use location::Location;
pub use placement::Placement;
pub use planner::{plan_turn, PlanOutcome, PlannerState, StepRecord, TurnPlanner};
