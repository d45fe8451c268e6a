//! Metropolis-style acceptance for a maximizing search.

use rand::Rng;

/// Temperatures below this are treated as the zero-temperature limit.
const MIN_TEMPERATURE: f64 = f64::MIN_POSITIVE;

/// Outcome of one acceptance test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub accepted: bool,
    /// Probability used for a non-improving candidate; `None` when the
    /// candidate improved and was accepted outright.
    pub probability: Option<f64>,
}

/// Decides whether a candidate replaces the current solution.
///
/// A strictly better candidate is always accepted. Otherwise the
/// candidate is accepted iff `exp(-|candidate - current| / T) > draw`,
/// where `draw` is uniform in `[0, 1)`. Equal scores therefore always
/// pass, since the probability is 1.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::AcceptanceRule;
///
/// assert!(AcceptanceRule.decide(10.0, 5.0, 1.0, 0.99).accepted);
/// assert!(!AcceptanceRule.decide(0.0, 100.0, 1.0, 0.5).accepted);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptanceRule;

impl AcceptanceRule {
    /// Probability of accepting a non-improving candidate.
    ///
    /// For temperatures that are zero, negative, or not finite the
    /// `T -> 0` limit is used: 1 for equal scores, 0 otherwise.
    pub fn probability(&self, candidate: f64, current: f64, temperature: f64) -> f64 {
        let delta = (candidate - current).abs();
        if !(temperature.is_finite() && temperature >= MIN_TEMPERATURE) {
            return if delta == 0.0 { 1.0 } else { 0.0 };
        }
        (-delta / temperature).exp()
    }

    pub fn decide(&self, candidate: f64, current: f64, temperature: f64, draw: f64) -> Decision {
        if candidate > current {
            return Decision {
                accepted: true,
                probability: None,
            };
        }
        let p = self.probability(candidate, current, temperature);
        Decision {
            accepted: p > draw,
            probability: Some(p),
        }
    }

    /// Like [`decide`](Self::decide), drawing from `rng` only when the
    /// candidate does not improve.
    pub fn decide_with<R: Rng>(
        &self,
        candidate: f64,
        current: f64,
        temperature: f64,
        rng: &mut R,
    ) -> Decision {
        if candidate > current {
            return self.decide(candidate, current, temperature, 0.0);
        }
        let draw = rng.random_range(0.0..1.0);
        self.decide(candidate, current, temperature, draw)
    }
}
