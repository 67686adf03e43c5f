//! Seeded train/test splitting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Randomly partition `records` into (train, test) subsets.
///
/// The records are shuffled with an RNG seeded from `seed`, then the
/// last `round(n * test_fraction)` records form the test set and the
/// remainder the training set. The partition is exactly reproducible for
/// a fixed seed and input ordering/length. No stratification is applied,
/// so category balance across the subsets is not guaranteed.
pub fn train_test_split<T>(mut records: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let total = records.len();
    let test_len = ((total as f64) * test_fraction).round() as usize;
    let test_len = test_len.min(total);

    let test = records.split_off(total - test_len);
    (records, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes_sum_to_total() {
        let records: Vec<usize> = (0..100).collect();
        let (train, test) = train_test_split(records, 0.2, 42);

        assert_eq!(train.len() + test.len(), 100);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_split_subsets_are_disjoint() {
        let records: Vec<usize> = (0..50).collect();
        let (train, test) = train_test_split(records, 0.2, 42);

        let train_set: HashSet<_> = train.iter().collect();
        let test_set: HashSet<_> = test.iter().collect();
        assert!(train_set.is_disjoint(&test_set));
        assert_eq!(train_set.len() + test_set.len(), 50);
    }

    #[test]
    fn test_split_is_reproducible_for_fixed_seed() {
        let records: Vec<usize> = (0..30).collect();
        let (train_a, test_a) = train_test_split(records.clone(), 0.2, 42);
        let (train_b, test_b) = train_test_split(records, 0.2, 42);

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_differs_for_different_seeds() {
        let records: Vec<usize> = (0..100).collect();
        let (train_a, _) = train_test_split(records.clone(), 0.2, 42);
        let (train_b, _) = train_test_split(records, 0.2, 43);

        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_split_tiny_inputs() {
        let (train, test) = train_test_split(vec![1], 0.2, 42);
        assert_eq!(train.len(), 1);
        assert!(test.is_empty());

        let (train, test) = train_test_split(Vec::<usize>::new(), 0.2, 42);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
