//! 0/1 knapsack model.
//!
//! Holds the immutable [`ProblemInstance`], the [`Solution`] inclusion
//! vector with its feasibility-gated scoring, and the
//! [`NeighborGenerator`] move operator used by the annealing engine.

mod instance;
mod neighbor;
mod solution;

pub use instance::{ProblemInstance, ITEM_COUNT};
pub use neighbor::{MoveOutcome, NeighborGenerator};
pub use solution::Solution;
