//! Annealing engine for the 0/1 knapsack.
//!
//! # Algorithm
//!
//! 1. Score the (repaired) initial solution; it becomes the best so far
//! 2. At each iteration:
//!    a. Advance the iteration counter and recompute the temperature
//!    b. Run a fixed number of cycles; each cycle backs up `current`,
//!    applies one add-then-repair move, scores it, and asks the
//!    acceptance rule
//!    c. On accept the candidate score becomes the current score; the
//!    solution is kept only if it is a new best, otherwise `current`
//!    reverts to the backup
//!    d. On reject `current` keeps the mutated solution and the current
//!    score is left unchanged
//! 3. Stop after `max_iterations` iterations
//!
//! Steps 2c and 2d deliberately differ from textbook Metropolis
//! bookkeeping (reject restores, accept keeps). The current score can
//! therefore disagree with the fitness of `current` between cycles.

use super::acceptance::AcceptanceRule;
use super::config::AnnealConfig;
use super::cooling::CoolingSchedule;
use super::types::{AnnealResult, CycleDecision, EngineState, ItemRow, IterationReport, Report};
use crate::error::AnnealError;
use crate::knapsack::{NeighborGenerator, ProblemInstance, Solution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Simulated annealing search over knapsack inclusion vectors.
///
/// Owns the problem instance, the random source, and three independent
/// solution slots: `current`, `backup`, and `best`.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::knapsack::ProblemInstance;
/// use knapsack_anneal::sa::{AnnealConfig, AnnealingEngine};
///
/// let instance = ProblemInstance::new(50, vec![10, 20, 30], vec![60, 100, 120]).unwrap();
/// let config = AnnealConfig::default()
///     .with_max_iterations(20)
///     .with_start_temperature(1000.0)
///     .with_end_temperature(0.01)
///     .with_seed(42);
///
/// let mut engine = AnnealingEngine::new(config, instance).unwrap();
/// loop {
///     let progress = engine.run_iteration();
///     if progress.done {
///         break;
///     }
/// }
/// assert!(engine.best_score() > 0.0);
/// ```
pub struct AnnealingEngine<R: Rng = StdRng> {
    config: AnnealConfig,
    schedule: CoolingSchedule,
    instance: ProblemInstance,
    rng: R,

    current: Solution,
    backup: Solution,
    best: Solution,

    state: EngineState,
    iteration: usize,
    temperature: f64,
    current_score: f64,
    best_score: f64,
    last_probability: Option<f64>,

    accepted_moves: usize,
    rejected_moves: usize,
    improving_moves: usize,
    score_history: Vec<f64>,
    decision_log: Option<Vec<CycleDecision>>,
}

impl AnnealingEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when none is set, starting at a random initial solution.
    pub fn new(config: AnnealConfig, instance: ProblemInstance) -> Result<Self, AnnealError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(config, instance, rng)
    }
}

impl<R: Rng> AnnealingEngine<R> {
    /// Creates an engine drawing from `rng`. `config.seed` is ignored.
    ///
    /// The initial solution includes each item with probability 1/2.
    pub fn with_rng(
        config: AnnealConfig,
        instance: ProblemInstance,
        mut rng: R,
    ) -> Result<Self, AnnealError> {
        let initial = Solution::random(instance.len(), &mut rng);
        Self::with_initial_solution(config, instance, initial, rng)
    }

    /// Creates an engine starting from `initial`.
    ///
    /// An over-capacity `initial` is not an error: it is repaired before
    /// the first evaluation.
    pub fn with_initial_solution(
        config: AnnealConfig,
        instance: ProblemInstance,
        initial: Solution,
        mut rng: R,
    ) -> Result<Self, AnnealError> {
        config.validate()?;
        let schedule = CoolingSchedule::new(
            config.start_temperature,
            config.end_temperature,
            config.max_iterations,
        )?;
        let mut current = Solution::from_taken(initial.into_taken(), &instance)?;

        let removed = NeighborGenerator.repair(&mut current, &instance, &mut rng);
        if !removed.is_empty() {
            debug!(removed = removed.len(), "repaired over-capacity initial solution");
        }

        let backup = current.clone();
        let best = current.clone();
        Ok(Self {
            temperature: schedule.start_temperature(),
            config,
            schedule,
            instance,
            rng,
            current,
            backup,
            best,
            state: EngineState::Uninitialized,
            iteration: 0,
            current_score: 0.0,
            best_score: f64::NEG_INFINITY,
            last_probability: None,
            accepted_moves: 0,
            rejected_moves: 0,
            improving_moves: 0,
            score_history: Vec::new(),
            decision_log: None,
        })
    }

    /// Records every cycle's acceptance decision, readable through
    /// [`decision_log`](Self::decision_log). Grows by one entry per cycle.
    pub fn with_decision_log(mut self) -> Self {
        self.decision_log = Some(Vec::new());
        self
    }

    /// Scores the initial solution and makes it the best so far.
    fn initialize(&mut self) {
        self.current_score = self.current.fitness(&self.instance);
        self.best.copy_from(&self.current);
        self.best_score = self.current_score;
        self.score_history.push(self.best_score);
        self.state = EngineState::Running;
        debug!(score = self.current_score, "initial solution scored");
    }

    /// Advances exactly one iteration and reports progress.
    ///
    /// Once the engine is done this is a no-op that reports the final
    /// progress again.
    pub fn run_iteration(&mut self) -> IterationReport {
        if self.state == EngineState::Done {
            return self.progress(0, 0);
        }

        if self.state == EngineState::Uninitialized {
            self.initialize();
        }

        self.iteration += 1;
        self.temperature = self.schedule.temperature(self.iteration);

        let mut accepted = 0usize;
        let mut rejected = 0usize;

        for cycle in 0..self.config.cycles_per_iteration {
            self.backup.copy_from(&self.current);

            NeighborGenerator.apply(&mut self.current, &self.instance, &mut self.rng);
            let candidate_score = self.current.fitness(&self.instance);

            if candidate_score > self.current_score {
                self.improving_moves += 1;
            }

            let decision = AcceptanceRule.decide_with(
                candidate_score,
                self.current_score,
                self.temperature,
                &mut self.rng,
            );
            if decision.probability.is_some() {
                self.last_probability = decision.probability;
            }

            trace!(
                cycle,
                candidate_score,
                current_score = self.current_score,
                accepted = decision.accepted,
                "cycle"
            );
            if let Some(log) = self.decision_log.as_mut() {
                log.push(CycleDecision {
                    iteration: self.iteration,
                    cycle,
                    candidate_score,
                    accepted: decision.accepted,
                });
            }

            if decision.accepted {
                accepted += 1;
                self.current_score = candidate_score;

                if candidate_score > self.best_score {
                    self.best_score = candidate_score;
                    self.best.copy_from(&self.current);
                    info!(
                        iteration = self.iteration,
                        best_score = self.best_score,
                        "new best"
                    );
                } else {
                    self.current.copy_from(&self.backup);
                }
            } else {
                rejected += 1;
            }
        }

        self.accepted_moves += accepted;
        self.rejected_moves += rejected;
        self.score_history.push(self.best_score);

        if self.iteration >= self.config.max_iterations {
            self.state = EngineState::Done;
            info!(
                iterations = self.iteration,
                best_score = self.best_score,
                "annealing finished"
            );
        }

        debug!(
            iteration = self.iteration,
            temperature = self.temperature,
            current_score = self.current_score,
            best_score = self.best_score,
            accepted,
            rejected,
            "iteration complete"
        );

        self.progress(accepted, rejected)
    }

    /// Runs iterations until done.
    pub fn run(&mut self) -> AnnealResult {
        self.run_with_cancel(None)
    }

    /// Runs iterations until done or until `cancel` is set.
    ///
    /// The flag is checked before each iteration; a cancelled engine is
    /// moved to [`EngineState::Done`]. The initial solution is always
    /// scored, so the result's best score matches its best solution even
    /// when cancelled before the first iteration.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> AnnealResult {
        let mut cancelled = false;

        while self.state != EngineState::Done {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    if self.state == EngineState::Uninitialized {
                        self.initialize();
                    }
                    cancelled = true;
                    self.state = EngineState::Done;
                    info!(iteration = self.iteration, "annealing cancelled");
                    break;
                }
            }
            self.run_iteration();
        }

        AnnealResult {
            best: self.best.clone(),
            best_score: self.best_score,
            iterations: self.iteration,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            rejected_moves: self.rejected_moves,
            improving_moves: self.improving_moves,
            cancelled,
            score_history: self.score_history.clone(),
        }
    }

    /// Final item table for the best solution.
    pub fn report(&self) -> Report {
        let items = (0..self.instance.len())
            .map(|index| ItemRow {
                index,
                value: self.instance.value(index),
                weight: self.instance.weight(index),
                included_in_best: self.best.is_taken(index),
            })
            .collect();

        Report {
            items,
            best_score: self.best_score,
            best_weight: self.best.total_weight(&self.instance),
            capacity: self.instance.capacity(),
        }
    }

    fn progress(&self, accepted: usize, rejected: usize) -> IterationReport {
        IterationReport {
            iteration: self.iteration,
            temperature: self.temperature,
            current_score: self.current_score,
            best_score: self.best_score,
            accepted,
            rejected,
            done: self.state == EngineState::Done,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == EngineState::Done
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Temperature of the latest iteration (start temperature before the first).
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current_score(&self) -> f64 {
        self.current_score
    }

    /// Best fitness so far; negative infinity before the first iteration.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn current(&self) -> &Solution {
        &self.current
    }

    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Per-cycle decisions, when enabled with
    /// [`with_decision_log`](Self::with_decision_log).
    pub fn decision_log(&self) -> Option<&[CycleDecision]> {
        self.decision_log.as_deref()
    }

    /// Acceptance probability of the most recent non-improving candidate.
    pub fn last_probability(&self) -> Option<f64> {
        self.last_probability
    }
}
