//! Add-one-then-repair move operator.

use super::instance::ProblemInstance;
use super::solution::Solution;
use rand::Rng;

/// What a single move did to a solution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Item switched on, or `None` when every item was already included.
    pub added: Option<usize>,
    /// Items switched off by the repair step, in removal order.
    pub removed: Vec<usize>,
}

impl MoveOutcome {
    /// True when the solution was left untouched.
    pub fn is_noop(&self) -> bool {
        self.added.is_none() && self.removed.is_empty()
    }
}

/// Produces a neighbor by including one excluded item and then dropping
/// random items until the packing fits.
///
/// Mutates the solution in place; no new [`Solution`] is allocated.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::knapsack::{NeighborGenerator, ProblemInstance, Solution};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let instance = ProblemInstance::new(25, vec![10, 20, 30], vec![1, 1, 1]).unwrap();
/// let mut solution = Solution::empty(3);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// NeighborGenerator.apply(&mut solution, &instance, &mut rng);
/// assert!(solution.total_weight(&instance) <= instance.capacity());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborGenerator;

impl NeighborGenerator {
    /// Applies one move.
    ///
    /// The added item is drawn uniformly from the excluded set. If nothing
    /// is excluded the call is a no-op.
    pub fn apply<R: Rng>(
        &self,
        solution: &mut Solution,
        instance: &ProblemInstance,
        rng: &mut R,
    ) -> MoveOutcome {
        if solution.all_included() {
            return MoveOutcome::default();
        }

        let excluded: Vec<usize> = solution.excluded().collect();
        let added = excluded[rng.random_range(0..excluded.len())];
        solution.set(added, true);

        let removed = self.repair(solution, instance, rng);
        MoveOutcome {
            added: Some(added),
            removed,
        }
    }

    /// Drops uniformly chosen included items until the solution fits.
    ///
    /// No item is preferred: the one just added, or any other, may go.
    /// Each pass removes exactly one included item, so at most `len()`
    /// removals happen. Returns the removed indices in order.
    pub fn repair<R: Rng>(
        &self,
        solution: &mut Solution,
        instance: &ProblemInstance,
        rng: &mut R,
    ) -> Vec<usize> {
        let mut removed = Vec::new();
        let capacity = u128::from(instance.capacity());
        let mut weight = solution.exact_weight(instance);

        while weight > capacity {
            let included: Vec<usize> = solution.included().collect();
            if included.is_empty() {
                break;
            }
            let idx = included[rng.random_range(0..included.len())];
            solution.set(idx, false);
            weight -= u128::from(instance.weight(idx));
            removed.push(idx);
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noop_when_all_included() {
        let instance = ProblemInstance::new(100, vec![10, 20, 30], vec![1, 2, 3]).unwrap();
        let mut solution = Solution::from_taken(vec![true; 3], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = NeighborGenerator.apply(&mut solution, &instance, &mut rng);

        assert!(outcome.is_noop());
        assert!(solution.all_included());
    }

    #[test]
    fn test_adds_the_single_excluded_item() {
        let instance = ProblemInstance::new(100, vec![10, 20, 30], vec![1, 2, 3]).unwrap();
        let mut solution = Solution::from_taken(vec![true, false, true], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = NeighborGenerator.apply(&mut solution, &instance, &mut rng);

        assert_eq!(outcome.added, Some(1));
        assert!(outcome.removed.is_empty());
        assert!(solution.all_included());
    }

    #[test]
    fn test_repair_may_drop_everything_for_zero_capacity() {
        let instance = ProblemInstance::new(0, vec![5, 5, 5], vec![1, 1, 1]).unwrap();
        let mut solution = Solution::from_taken(vec![true; 3], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let removed = NeighborGenerator.repair(&mut solution, &instance, &mut rng);

        assert_eq!(removed.len(), 3);
        assert_eq!(solution.included().count(), 0);
    }

    #[test]
    fn test_repair_leaves_feasible_solution_alone() {
        let instance = ProblemInstance::new(30, vec![10, 20, 30], vec![1, 2, 3]).unwrap();
        let mut solution = Solution::from_taken(vec![true, true, false], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        assert!(NeighborGenerator
            .repair(&mut solution, &instance, &mut rng)
            .is_empty());
        assert_eq!(solution.taken(), &[true, true, false]);
    }

    #[test]
    fn test_full_overweight_solution_is_left_to_repair() {
        let instance = ProblemInstance::new(0, vec![23, 39], vec![0, 0]).unwrap();
        let mut solution = Solution::from_taken(vec![true, true], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(NeighborGenerator.apply(&mut solution, &instance, &mut rng).is_noop());
        assert!(!solution.is_feasible(&instance));

        NeighborGenerator.repair(&mut solution, &instance, &mut rng);
        assert!(solution.is_feasible(&instance));
    }

    #[test]
    fn test_repair_with_weights_near_u64_max() {
        let instance =
            ProblemInstance::new(10, vec![u64::MAX, u64::MAX, 5], vec![1, 1, 1]).unwrap();
        let mut solution = Solution::from_taken(vec![true; 3], &instance).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let removed = NeighborGenerator.repair(&mut solution, &instance, &mut rng);

        assert!(solution.is_feasible(&instance));
        assert!(!solution.is_taken(0) && !solution.is_taken(1));
        assert!(removed.len() <= 3);
    }

    #[test]
    fn test_zero_weight_items_never_need_repair() {
        let instance = ProblemInstance::new(0, vec![0, 0, 0], vec![4, 5, 6]).unwrap();
        let mut solution = Solution::empty(3);
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..3 {
            let outcome = NeighborGenerator.apply(&mut solution, &instance, &mut rng);
            assert!(outcome.removed.is_empty());
        }
        assert!(solution.all_included());
    }

    proptest! {
        #[test]
        fn prop_move_keeps_feasible(
            items in prop::collection::vec((0u64..40, 0u64..40, any::<bool>()), 1..60),
            capacity in 0u64..400,
            seed in any::<u64>(),
        ) {
            let weights = items.iter().map(|t| t.0).collect();
            let values = items.iter().map(|t| t.1).collect();
            let taken = items.iter().map(|t| t.2).collect();
            let instance = ProblemInstance::new(capacity, weights, values).unwrap();
            let mut solution = Solution::from_taken(taken, &instance).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            // Moves start from a feasible solution; a full, overweight one has no move.
            NeighborGenerator.repair(&mut solution, &instance, &mut rng);

            let outcome = NeighborGenerator.apply(&mut solution, &instance, &mut rng);

            prop_assert!(solution.total_weight(&instance) <= capacity);
            prop_assert!(outcome.removed.len() <= instance.len());
        }

        #[test]
        fn prop_repair_bounded_by_item_count(
            weights in prop::collection::vec(0u64..100, 1..60),
            capacity in 0u64..200,
            seed in any::<u64>(),
        ) {
            let n = weights.len();
            let instance = ProblemInstance::new(capacity, weights, vec![1; n]).unwrap();
            let mut solution = Solution::from_taken(vec![true; n], &instance).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            let removed = NeighborGenerator.repair(&mut solution, &instance, &mut rng);

            prop_assert!(removed.len() <= n);
            prop_assert!(solution.is_feasible(&instance));
        }
    }
}
