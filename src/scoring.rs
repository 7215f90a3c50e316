//! Candidate evaluation and selection.
//!
//! The engine owns the parts common to every strategy: baseline metrics on
//! the pre-candidate board, trial boards, the hard lane-severing filter, the
//! least-constraining-value cost, jitter, and the epsilon-greedy pick. The
//! type-specific benefit side is delegated to a `ScoringStrategy`.

use crate::board::*;
use crate::config::*;
use crate::path::*;
use crate::placement::*;
use log::*;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named, weighted benefit component, as reported in diagnostics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f32,
    pub weight: f32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: f32, weight: f32) -> Self {
        ScoreEntry {
            name: name.into(),
            score,
            weight,
        }
    }
}

/// Metrics of the pre-candidate board, computed once per planning step and
/// shared by every candidate evaluation in that step.
#[derive(Clone, Debug)]
pub struct Baseline {
    pub future_options: usize,
    pub lanes: LaneMetrics,
}

impl Baseline {
    pub fn compute(board: &Board, config: &PlannerConfig) -> Self {
        Baseline {
            future_options: count_future_options(board, config),
            lanes: analyze_lanes(board, config),
        }
    }
}

/// Read-only view handed to strategies for one candidate evaluation.
pub struct ScoreContext<'a> {
    /// The authoritative pre-candidate board.
    pub board: &'a Board,
    pub config: &'a PlannerConfig,
    pub baseline: &'a Baseline,
}

/// Type-specific benefit policy. Strategies are stateless; the engine owns
/// randomness and the constraint side of the score.
pub trait ScoringStrategy {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Benefit components for one candidate, given its trial board and the
    /// trial board's lane metrics. The candidate is already known to leave
    /// at least one lane viable.
    fn benefit(
        &self,
        ctx: &ScoreContext,
        candidate: &Placement,
        trial: &Board,
        trial_lanes: &LaneMetrics,
    ) -> Vec<ScoreEntry>;
}

/// One fully evaluated candidate.
#[derive(Clone, Debug)]
pub struct ScoredCandidate {
    pub placement: Placement,
    pub total: f32,
    pub benefit: Vec<ScoreEntry>,
    pub constraint_cost: f32,
    pub jitter: f32,
    pub lanes_after: usize,
    pub options_after: usize,
}

fn weighted_sum(entries: &[ScoreEntry]) -> f32 {
    entries.iter().map(|e| e.score * e.weight).sum()
}

/// Evaluate every legal candidate against the baseline. Candidates whose
/// trial board has zero viable lanes are dropped here and never scored.
pub fn evaluate_candidates<R: Rng>(
    board: &Board,
    config: &PlannerConfig,
    strategy: &dyn ScoringStrategy,
    baseline: &Baseline,
    rng: &mut R,
) -> Vec<ScoredCandidate> {
    let ctx = ScoreContext {
        board,
        config,
        baseline,
    };

    let mut scored = Vec::new();
    for candidate in generate_candidates(board, config) {
        let trial = apply(board, config, &candidate);
        let trial_lanes = analyze_lanes(&trial, config);
        if trial_lanes.viable_lanes == 0 {
            // Sealing the board is never allowed.
            continue;
        }

        let options_after = count_future_options(&trial, config);
        let constraint_cost = baseline.future_options.saturating_sub(options_after) as f32;
        let benefit = strategy.benefit(&ctx, &candidate, &trial, &trial_lanes);
        let jitter = if config.jitter > 0.0 {
            rng.random_range(-config.jitter..=config.jitter)
        } else {
            0.0
        };
        let total = weighted_sum(&benefit) - config.weights.constraint * constraint_cost + jitter;

        scored.push(ScoredCandidate {
            placement: candidate,
            total,
            benefit,
            constraint_cost,
            jitter,
            lanes_after: trial_lanes.viable_lanes,
            options_after,
        });
    }
    scored
}

/// Epsilon-greedy pick over the scored candidates. With probability epsilon,
/// explore uniformly among the top `top_k`; otherwise pick uniformly among
/// the candidates tied for the best score. Returns an index into `scored`,
/// or `None` when nothing survived evaluation ("no viable move").
pub fn select<R: Rng>(
    scored: &[ScoredCandidate],
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<usize> {
    if scored.is_empty() {
        return None;
    }

    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|&a, &b| scored[b].total.total_cmp(&scored[a].total));

    let explore = config.epsilon > 0.0 && rng.random_bool(config.epsilon as f64);
    if explore {
        let pool = &order[..config.top_k.min(order.len())];
        return pool.choose(rng).copied();
    }

    let best = scored[order[0]].total;
    let tied: Vec<usize> = order
        .iter()
        .copied()
        .take_while(|&i| scored[i].total == best)
        .collect();
    if tied.len() > 1 {
        trace!("{} candidates tied at {:.4}", tied.len(), best);
    }
    tied.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::strategies::strategy_for;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sealed_column_setup(config: &PlannerConfig) -> Board {
        // Two vertical walls leave a single gap at (4, 4); one horizontal
        // wall through that gap would seal the board.
        let board = Board::new(9, 9);
        let board = apply(
            &board,
            config,
            &Placement::WallVertical {
                origin: Location::from_rc(0, 4),
            },
        );
        apply(
            &board,
            config,
            &Placement::WallVertical {
                origin: Location::from_rc(5, 4),
            },
        )
    }

    #[test]
    fn lane_severing_candidates_are_never_scored() {
        let config = PlannerConfig {
            jitter: 0.0,
            epsilon: 0.0,
            ..Default::default()
        };
        let board = sealed_column_setup(&config);
        let sealing = Placement::WallHorizontal {
            origin: Location::from_rc(4, 1),
        };
        assert!(generate_candidates(&board, &config).contains(&sealing));

        let strategy = strategy_for(StrategyKind::Corridor);
        let baseline = Baseline::compute(&board, &config);
        let mut rng = Pcg32::seed_from_u64(1);
        let scored = evaluate_candidates(&board, &config, strategy.as_ref(), &baseline, &mut rng);

        assert!(!scored.is_empty());
        assert!(scored.iter().all(|c| c.placement != sealing));
        assert!(scored.iter().all(|c| c.lanes_after >= 1));
    }

    #[test]
    fn constraint_cost_counts_removed_options() {
        let config = PlannerConfig {
            jitter: 0.0,
            epsilon: 0.0,
            strategy: StrategyKind::LeastConstraining,
            ..Default::default()
        };
        let board = Board::new(9, 9);
        let strategy = strategy_for(config.strategy);
        let baseline = Baseline::compute(&board, &config);
        let mut rng = Pcg32::seed_from_u64(7);
        let scored = evaluate_candidates(&board, &config, strategy.as_ref(), &baseline, &mut rng);

        for candidate in &scored {
            assert!(candidate.constraint_cost >= 0.0);
            assert_eq!(
                candidate.constraint_cost,
                (baseline.future_options - candidate.options_after) as f32
            );
        }
    }

    #[test]
    fn greedy_selection_is_reproducible() {
        let config = PlannerConfig {
            jitter: 0.0,
            epsilon: 0.0,
            ..Default::default()
        };
        let board = Board::new(9, 9);
        let strategy = strategy_for(config.strategy);
        let baseline = Baseline::compute(&board, &config);

        let pick = |seed: u64| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let scored =
                evaluate_candidates(&board, &config, strategy.as_ref(), &baseline, &mut rng);
            let index = select(&scored, &config, &mut rng).unwrap();
            scored[index].placement
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn empty_candidate_set_is_no_viable_move() {
        let config = PlannerConfig::default();
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(select(&[], &config, &mut rng), None);
    }
}
