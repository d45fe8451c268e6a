//! Annealing configuration.

use crate::error::AnnealError;

/// Configuration for the knapsack annealing engine.
///
/// Defaults match a long, slow anneal: 100 iterations of 100 cycles each,
/// cooling from 40000 down to 0.001.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(200)
///     .with_start_temperature(1000.0)
///     .with_end_temperature(0.01)
///     .with_cycles_per_iteration(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealConfig {
    /// Number of iterations (temperature levels). Must be positive.
    pub max_iterations: usize,

    /// Temperature at iteration 0. Must be positive and finite.
    pub start_temperature: f64,

    /// Temperature approached at the last iteration. Must be positive and finite.
    pub end_temperature: f64,

    /// Candidate evaluations per iteration.
    pub cycles_per_iteration: usize,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            start_temperature: 40000.0,
            end_temperature: 0.001,
            cycles_per_iteration: 100,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_end_temperature(mut self, t: f64) -> Self {
        self.end_temperature = t;
        self
    }

    pub fn with_cycles_per_iteration(mut self, n: usize) -> Self {
        self.cycles_per_iteration = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Unlike a threshold-stopped anneal, the end temperature may exceed
    /// the start temperature; the schedule then heats instead of cools.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if self.max_iterations == 0 {
            return Err(AnnealError::invalid("max_iterations must be positive"));
        }
        if self.cycles_per_iteration == 0 {
            return Err(AnnealError::invalid("cycles_per_iteration must be positive"));
        }
        check_temperature("start_temperature", self.start_temperature)?;
        check_temperature("end_temperature", self.end_temperature)?;
        Ok(())
    }
}

pub(crate) fn check_temperature(name: &str, t: f64) -> Result<(), AnnealError> {
    if !t.is_finite() || t <= 0.0 {
        return Err(AnnealError::invalid(format!(
            "{name} must be positive and finite, got {t}"
        )));
    }
    Ok(())
}
