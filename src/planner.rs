//! The turn planner: one planning session, run to completion.
//!
//! `TurnPlanner` drives the commit loop: pull candidates, score them, commit
//! the winner, repeat until budgets run out, no viable candidate remains, or
//! the step cap trips. The authoritative board mutates only here, strictly
//! after a candidate is finally chosen; everything upstream works on trial
//! clones.

use crate::board::*;
use crate::config::*;
use crate::placement::*;
use crate::scoring::*;
use crate::strategies::strategy_for;
use log::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Planner lifecycle. Once `Done`, further `step` calls are no-ops.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlannerState {
    Planning,
    Done,
}

/// Diagnostic record for one committed placement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    pub placement: Placement,
    pub score: f32,
    pub constraint_cost: f32,
    pub jitter: f32,
    pub benefit: Vec<ScoreEntry>,
    pub lanes_before: usize,
    pub lanes_after: usize,
    pub options_before: usize,
    pub options_after: usize,
}

/// Everything the host consumes after planning: the frozen board, the
/// committed placements in commit order, and per-step diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub board: Board,
    pub placements: Vec<Placement>,
    pub diagnostics: Vec<StepRecord>,
}

/// One planning session over one board.
pub struct TurnPlanner {
    board: Board,
    config: PlannerConfig,
    strategy: Box<dyn ScoringStrategy>,
    rng: Pcg32,
    state: PlannerState,
    placements: Vec<Placement>,
    diagnostics: Vec<StepRecord>,
}

impl TurnPlanner {
    /// Start a session on a fresh, empty board.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols);
        Self::with_board(board, config)
    }

    /// Start a session on an existing board (e.g. carrying structures from a
    /// previous turn).
    pub fn with_board(board: Board, config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardMismatch {
                board_rows: board.rows(),
                board_cols: board.cols(),
                rows: config.rows,
                cols: config.cols,
            });
        }
        let strategy = strategy_for(config.strategy);
        let rng = Pcg32::seed_from_u64(config.seed);
        Ok(TurnPlanner {
            board,
            config,
            strategy,
            rng,
            state: PlannerState::Planning,
            placements: Vec::new(),
            diagnostics: Vec::new(),
        })
    }

    pub fn state(&self) -> PlannerState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn budgets_exhausted(&self) -> bool {
        self.board.towers_placed() >= self.config.max_towers
            && self.board.walls_placed() >= self.config.max_walls
    }

    /// Run one planning step: score candidates and commit the winner.
    /// Returns the diagnostic record of the committed placement, or `None`
    /// when the session reached `Done` instead (budgets exhausted, step cap,
    /// or no viable move).
    pub fn step(&mut self) -> Option<&StepRecord> {
        if self.state == PlannerState::Done {
            return None;
        }
        if self.budgets_exhausted() {
            debug!("planning done: budgets exhausted");
            self.state = PlannerState::Done;
            return None;
        }
        if self.placements.len() >= self.config.max_steps {
            warn!(
                "planning stopped at step cap ({}) before budgets ran out",
                self.config.max_steps
            );
            self.state = PlannerState::Done;
            return None;
        }

        let baseline = Baseline::compute(&self.board, &self.config);
        let scored = evaluate_candidates(
            &self.board,
            &self.config,
            self.strategy.as_ref(),
            &baseline,
            &mut self.rng,
        );
        let winner = match select(&scored, &self.config, &mut self.rng) {
            Some(index) => &scored[index],
            None => {
                // A normal terminal condition, not a failure.
                debug!("planning done: no viable move");
                self.state = PlannerState::Done;
                return None;
            }
        };

        self.board = apply(&self.board, &self.config, &winner.placement);
        debug!(
            "committed {:?} via {}: score={:.3} cost={} lanes {}->{}",
            winner.placement,
            self.strategy.name(),
            winner.total,
            winner.constraint_cost,
            baseline.lanes.viable_lanes,
            winner.lanes_after,
        );

        self.placements.push(winner.placement);
        self.diagnostics.push(StepRecord {
            placement: winner.placement,
            score: winner.total,
            constraint_cost: winner.constraint_cost,
            jitter: winner.jitter,
            benefit: winner.benefit.clone(),
            lanes_before: baseline.lanes.viable_lanes,
            lanes_after: winner.lanes_after,
            options_before: baseline.future_options,
            options_after: winner.options_after,
        });
        self.diagnostics.last()
    }

    /// Run the session to completion and freeze the board.
    pub fn run(mut self) -> PlanOutcome {
        while self.state == PlannerState::Planning {
            self.step();
        }
        PlanOutcome {
            board: self.board,
            placements: self.placements,
            diagnostics: self.diagnostics,
        }
    }
}

/// Plan one preparation turn on the given board. The single entry point for
/// hosts: validates the configuration, runs the session to completion, and
/// returns the frozen outcome.
pub fn plan_turn(board: Board, config: &PlannerConfig) -> Result<PlanOutcome, ConfigError> {
    Ok(TurnPlanner::with_board(board, config.clone())?.run())
}
