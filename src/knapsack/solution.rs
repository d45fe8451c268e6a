//! Inclusion-vector solution and its scoring.

use super::instance::ProblemInstance;
use crate::error::AnnealError;
use rand::Rng;

/// A candidate packing: `taken[i]` is true when item `i` is in the knapsack.
///
/// Weight and fitness are derived on demand from a [`ProblemInstance`];
/// nothing besides the inclusion vector is stored. Cloning and
/// [`copy_from`](Solution::copy_from) produce fully independent vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    taken: Vec<bool>,
}

impl Solution {
    /// The empty packing over `n` items.
    pub fn empty(n: usize) -> Self {
        Self {
            taken: vec![false; n],
        }
    }

    /// Includes each item independently with probability 1/2.
    ///
    /// The result may exceed capacity; callers repair it before scoring.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            taken: (0..n).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Wraps an explicit inclusion vector, checking it matches the instance.
    pub fn from_taken(taken: Vec<bool>, instance: &ProblemInstance) -> Result<Self, AnnealError> {
        if taken.len() != instance.len() {
            return Err(AnnealError::invalid(format!(
                "solution covers {} items, instance has {}",
                taken.len(),
                instance.len()
            )));
        }
        Ok(Self { taken })
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    pub fn taken(&self) -> &[bool] {
        &self.taken
    }

    pub fn into_taken(self) -> Vec<bool> {
        self.taken
    }

    pub fn is_taken(&self, index: usize) -> bool {
        self.taken[index]
    }

    pub fn set(&mut self, index: usize, taken: bool) {
        self.taken[index] = taken;
    }

    /// Sum of the weights of included items, saturating at `u64::MAX`.
    pub fn total_weight(&self, instance: &ProblemInstance) -> u64 {
        u64::try_from(self.exact_weight(instance)).unwrap_or(u64::MAX)
    }

    /// Sum of the weights of included items, without overflow.
    pub(crate) fn exact_weight(&self, instance: &ProblemInstance) -> u128 {
        self.included().map(|i| u128::from(instance.weight(i))).sum()
    }

    /// Sum of the values of included items, or 0 when over capacity.
    ///
    /// Overweight is a hard gate, not a proportional penalty.
    pub fn fitness(&self, instance: &ProblemInstance) -> f64 {
        if !self.is_feasible(instance) {
            return 0.0;
        }
        self.included()
            .map(|i| u128::from(instance.value(i)))
            .sum::<u128>() as f64
    }

    pub fn is_feasible(&self, instance: &ProblemInstance) -> bool {
        self.exact_weight(instance) <= u128::from(instance.capacity())
    }

    /// Overwrites this inclusion vector with `other`'s, reusing the buffer.
    pub fn copy_from(&mut self, other: &Solution) {
        self.taken.clone_from(&other.taken);
    }

    /// True when every item is included, so no add-move exists.
    pub fn all_included(&self) -> bool {
        self.taken.iter().all(|&t| t)
    }

    /// Indices of included items, ascending.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.taken
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| t.then_some(i))
    }

    /// Indices of excluded items, ascending.
    pub fn excluded(&self) -> impl Iterator<Item = usize> + '_ {
        self.taken
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| (!t).then_some(i))
    }
}
