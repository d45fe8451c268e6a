//! Immutable knapsack problem data.

use crate::error::AnnealError;
use rand::Rng;

/// Number of items in a randomly generated instance.
pub const ITEM_COUNT: usize = 50;

/// A 0/1 knapsack instance: a weight cap and per-item weight/value.
///
/// Built once and never mutated. The engine owns it and lends it
/// read-only to the scorer and the neighbor generator.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::knapsack::ProblemInstance;
///
/// let instance = ProblemInstance::new(50, vec![10, 20, 30], vec![60, 100, 120]).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.weight(1), 20);
/// assert_eq!(instance.value(2), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    capacity: u64,
    weights: Vec<u64>,
    values: Vec<u64>,
}

impl ProblemInstance {
    /// Creates an instance from explicit item data.
    ///
    /// Fails if `weights` and `values` differ in length.
    pub fn new(capacity: u64, weights: Vec<u64>, values: Vec<u64>) -> Result<Self, AnnealError> {
        if weights.len() != values.len() {
            return Err(AnnealError::invalid(format!(
                "weights and values must have equal length, got {} and {}",
                weights.len(),
                values.len()
            )));
        }
        Ok(Self {
            capacity,
            weights,
            values,
        })
    }

    /// Generates [`ITEM_COUNT`] items with each weight drawn uniformly from
    /// `[0, max_weight_item)` and each value from `[0, max_value_item)`.
    pub fn random<R: Rng>(
        capacity: u64,
        max_weight_item: u64,
        max_value_item: u64,
        rng: &mut R,
    ) -> Result<Self, AnnealError> {
        if max_weight_item == 0 {
            return Err(AnnealError::invalid("max_weight_item must be positive"));
        }
        if max_value_item == 0 {
            return Err(AnnealError::invalid("max_value_item must be positive"));
        }

        let mut weights = Vec::with_capacity(ITEM_COUNT);
        let mut values = Vec::with_capacity(ITEM_COUNT);
        for _ in 0..ITEM_COUNT {
            weights.push(rng.random_range(0..max_weight_item));
            values.push(rng.random_range(0..max_value_item));
        }

        Self::new(capacity, weights, values)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of item `index`. Panics if out of range.
    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    /// Value of item `index`. Panics if out of range.
    pub fn value(&self, index: usize) -> u64 {
        self.values[index]
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }
}
