//! Geometric interpolation cooling.

use super::config::check_temperature;
use crate::error::AnnealError;

/// Maps an iteration index to a temperature.
///
/// `T(k) = T_start * (T_end / T_start) ^ (k / max_iterations)`
///
/// `T(0)` is exactly `T_start`. Iterations at or past `max_iterations`
/// yield exactly `T_end`, which is never zero.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::CoolingSchedule;
///
/// let schedule = CoolingSchedule::new(100.0, 1.0, 2).unwrap();
/// assert_eq!(schedule.temperature(0), 100.0);
/// assert!((schedule.temperature(1) - 10.0).abs() < 1e-9);
/// assert_eq!(schedule.temperature(2), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    start_temperature: f64,
    end_temperature: f64,
    max_iterations: usize,
}

impl CoolingSchedule {
    /// Fails for non-positive or non-finite temperatures and for a zero
    /// iteration count.
    pub fn new(
        start_temperature: f64,
        end_temperature: f64,
        max_iterations: usize,
    ) -> Result<Self, AnnealError> {
        check_temperature("start_temperature", start_temperature)?;
        check_temperature("end_temperature", end_temperature)?;
        if max_iterations == 0 {
            return Err(AnnealError::invalid("max_iterations must be positive"));
        }
        Ok(Self {
            start_temperature,
            end_temperature,
            max_iterations,
        })
    }

    pub fn temperature(&self, iteration: usize) -> f64 {
        if iteration == 0 {
            return self.start_temperature;
        }
        if iteration >= self.max_iterations {
            return self.end_temperature;
        }
        let exp = iteration as f64 / self.max_iterations as f64;
        self.start_temperature * (self.end_temperature / self.start_temperature).powf(exp)
    }

    pub fn start_temperature(&self) -> f64 {
        self.start_temperature
    }

    pub fn end_temperature(&self) -> f64 {
        self.end_temperature
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_invalid() {
        assert!(CoolingSchedule::new(0.0, 1.0, 10).is_err());
        assert!(CoolingSchedule::new(1.0, -1.0, 10).is_err());
        assert!(CoolingSchedule::new(1.0, 0.1, 0).is_err());
    }

    #[test]
    fn test_midpoint_is_geometric_mean() {
        let schedule = CoolingSchedule::new(1000.0, 0.001, 10).unwrap();
        assert!((schedule.temperature(5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_strictly_decreasing_when_cooling() {
        let schedule = CoolingSchedule::new(40000.0, 0.001, 100).unwrap();
        for k in 0..100 {
            assert!(schedule.temperature(k + 1) < schedule.temperature(k));
        }
    }

    proptest! {
        #[test]
        fn prop_endpoints(
            start in 1e-6f64..1e6,
            end in 1e-6f64..1e6,
            m in 1usize..10_000,
        ) {
            let schedule = CoolingSchedule::new(start, end, m).unwrap();
            prop_assert_eq!(schedule.temperature(0), start);
            prop_assert_eq!(schedule.temperature(m), end);
        }

        #[test]
        fn prop_stays_between_endpoints(
            start in 1e-3f64..1e5,
            end in 1e-3f64..1e5,
            m in 1usize..1000,
            k in 0usize..1000,
        ) {
            let schedule = CoolingSchedule::new(start, end, m).unwrap();
            let t = schedule.temperature(k);
            let (lo, hi) = if start < end { (start, end) } else { (end, start) };
            prop_assert!(t >= lo * (1.0 - 1e-9) && t <= hi * (1.0 + 1e-9));
        }
    }
}
