//! Tour construction for a single ant.

use crate::matrix::SquareMatrix;
use crate::sampling::sample_next;
use rand::Rng;

/// Constructs one complete tour starting at `start`.
///
/// The candidate list holds every node except `start`; each of the n−1
/// sampling steps picks the next node from the remaining candidates using
/// the outgoing transition weights of the last-added node, then removes it.
///
/// # Panics
/// Panics if candidates remain after n−1 steps or the tour is not a
/// permutation. Either indicates a sampler bug and is never silently
/// repaired.
pub fn build_tour<R: Rng>(start: usize, transition: &SquareMatrix, rng: &mut R) -> Vec<usize> {
    let n = transition.n();
    let mut tour = Vec::with_capacity(n);
    tour.push(start);

    let mut candidates: Vec<usize> = (0..n).filter(|&node| node != start).collect();

    for _ in 0..n - 1 {
        let current = *tour.last().unwrap();
        let next = sample_next(current, &candidates, transition, rng);
        let pos = candidates
            .iter()
            .position(|&node| node == next)
            .expect("sampled node not in candidate list");
        candidates.remove(pos);
        tour.push(next);
    }

    assert!(
        candidates.is_empty(),
        "tour construction left {} unvisited nodes",
        candidates.len()
    );
    assert_eq!(tour.len(), n, "tour does not visit every node exactly once");
    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_permutation(tour: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        for &node in tour {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        tour.len() == n
    }

    #[test]
    fn test_build_tour_starts_at_start() {
        let w = SquareMatrix::ones(5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let tour = build_tour(3, &w, &mut rng);
        assert_eq!(tour[0], 3);
        assert!(is_permutation(&tour, 5));
    }

    #[test]
    fn test_build_tour_two_nodes() {
        let w = SquareMatrix::ones(2);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(build_tour(0, &w, &mut rng), vec![0, 1]);
        assert_eq!(build_tour(1, &w, &mut rng), vec![1, 0]);
    }

    #[test]
    fn test_build_tour_zero_weights_still_completes() {
        // All-zero transition weights force the uniform fallback on every
        // step; the tour must still be a full permutation.
        let w = SquareMatrix::zeros(6);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tour = build_tour(0, &w, &mut rng);
        assert!(is_permutation(&tour, 6));
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation(
            n in 2usize..12,
            start_raw in 0usize..12,
            seed in any::<u64>(),
            weight_seed in any::<u64>(),
        ) {
            let start = start_raw % n;
            let mut wrng = ChaCha8Rng::seed_from_u64(weight_seed);
            let mut w = SquareMatrix::zeros(n);
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        w.set(i, j, wrng.random_range(0.0..10.0));
                    }
                }
            }
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tour = build_tour(start, &w, &mut rng);
            prop_assert_eq!(tour[0], start);
            prop_assert!(is_permutation(&tour, n));
        }
    }
}
