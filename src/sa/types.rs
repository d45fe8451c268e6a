//! Progress, report, and result types returned by the engine.

use crate::knapsack::Solution;

/// Lifecycle of an [`AnnealingEngine`](super::AnnealingEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// Constructed; the initial solution has not been scored yet.
    Uninitialized,
    /// At least one iteration has run and more remain.
    Running,
    /// `max_iterations` reached or cancelled.
    Done,
}

/// Progress after one call to
/// [`run_iteration`](super::AnnealingEngine::run_iteration).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationReport {
    /// 1-based count of completed iterations.
    pub iteration: usize,
    /// Temperature used for this iteration's cycles.
    pub temperature: f64,
    /// Score the acceptance rule compares against after the last cycle.
    pub current_score: f64,
    pub best_score: f64,
    /// Candidates accepted during this iteration.
    pub accepted: usize,
    /// Candidates rejected during this iteration.
    pub rejected: usize,
    pub done: bool,
}

/// Acceptance decision taken in one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleDecision {
    /// 1-based iteration the cycle belongs to.
    pub iteration: usize,
    /// 0-based cycle index within the iteration.
    pub cycle: usize,
    pub candidate_score: f64,
    pub accepted: bool,
}

/// One row of the final item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRow {
    /// 0-based item index.
    pub index: usize,
    pub value: u64,
    pub weight: u64,
    pub included_in_best: bool,
}

/// Final item table for the best solution found.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub items: Vec<ItemRow>,
    pub best_score: f64,
    pub best_weight: u64,
    pub capacity: u64,
}

/// Result of running the engine to completion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best solution found.
    pub best: Solution,

    /// Fitness of the best solution.
    pub best_score: f64,

    /// Number of completed iterations.
    pub iterations: usize,

    /// Temperature of the last completed iteration.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of rejected candidates.
    pub rejected_moves: usize,

    /// Number of candidates that beat the current score.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best score before the first iteration and after each completed one.
    pub score_history: Vec<f64>,
}
