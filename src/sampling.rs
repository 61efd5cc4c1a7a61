//! Transition weights and roulette-wheel node sampling.

use crate::matrix::SquareMatrix;
use rand::Rng;

/// Computes the transition weight matrix `ph^alpha * des^beta`, elementwise.
///
/// Weights are computed for every ordered pair, including pairs that are
/// infeasible at any given construction step; feasibility filtering happens
/// in [`sample_next`], which only looks at the remaining candidates.
pub fn transition_matrix(
    pheromone: &SquareMatrix,
    desirability: &SquareMatrix,
    alpha: f64,
    beta: f64,
) -> SquareMatrix {
    let n = pheromone.n();
    let mut weights = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let w = pheromone.get(i, j).powf(alpha) * desirability.get(i, j).powf(beta);
            weights.set(i, j, w);
        }
    }
    weights
}

/// Samples the next node among `candidates` by roulette-wheel selection on
/// the outgoing weights of `current`.
///
/// Cumulative weights are accumulated over the candidates in their given
/// order, normalized by the total, and a uniform draw in `[0, 1)` picks the
/// first candidate whose cumulative share covers it.
///
/// When the total outgoing weight is zero (every remaining candidate is
/// unreachable under the inverse-distance convention) or non-finite, the
/// normalization is undefined; the documented fallback is a uniform random
/// choice among the candidates. The run continues, it never divides by zero.
///
/// # Panics
/// Panics if `candidates` is empty.
pub fn sample_next<R: Rng>(
    current: usize,
    candidates: &[usize],
    weights: &SquareMatrix,
    rng: &mut R,
) -> usize {
    assert!(!candidates.is_empty(), "no candidates left to sample from");

    let mut cumulative = Vec::with_capacity(candidates.len());
    let mut total = 0.0;
    for &node in candidates {
        total += weights.get(current, node);
        cumulative.push(total);
    }

    if total <= 0.0 || !total.is_finite() {
        // Degenerate outgoing weights: fall back to a uniform choice.
        let idx = rng.random_range(0..candidates.len());
        return candidates[idx];
    }

    let r = rng.random_range(0.0..1.0);
    for (idx, &acc) in cumulative.iter().enumerate() {
        if acc / total >= r {
            return candidates[idx];
        }
    }
    // r is in [0, 1) and the last normalized entry is exactly 1.0, so the
    // loop always returns; this guards floating-point rounding only.
    *candidates.last().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_transition_matrix_elementwise() {
        let mut ph = SquareMatrix::ones(2);
        ph.set(0, 1, 4.0);
        let mut des = SquareMatrix::zeros(2);
        des.set(0, 1, 0.25);
        des.set(1, 0, 1.0);

        let w = transition_matrix(&ph, &des, 0.5, 1.0);
        // 4^0.5 * 0.25^1 = 2 * 0.25
        assert!((w.get(0, 1) - 0.5).abs() < 1e-12);
        assert!((w.get(1, 0) - 1.0).abs() < 1e-12);
        assert_eq!(w.get(0, 0), 0.0);
    }

    #[test]
    fn test_sample_next_single_candidate() {
        let w = SquareMatrix::ones(3);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(sample_next(0, &[2], &w, &mut rng), 2);
    }

    #[test]
    fn test_sample_next_follows_weights() {
        // Node 2 carries all the weight out of node 0.
        let mut w = SquareMatrix::zeros(3);
        w.set(0, 1, 0.0);
        w.set(0, 2, 5.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(sample_next(0, &[1, 2], &w, &mut rng), 2);
        }
    }

    #[test]
    fn test_sample_next_zero_total_falls_back_uniform() {
        let w = SquareMatrix::zeros(4);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let candidates = [1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let node = sample_next(0, &candidates, &w, &mut rng);
            assert!(candidates.contains(&node));
            seen[node] = true;
        }
        // Uniform fallback should reach every candidate eventually.
        assert!(seen[1] && seen[2] && seen[3]);
    }

    #[test]
    fn test_sample_next_deterministic_with_seed() {
        let mut w = SquareMatrix::zeros(3);
        w.set(0, 1, 1.0);
        w.set(0, 2, 1.0);
        let a = sample_next(0, &[1, 2], &w, &mut ChaCha8Rng::seed_from_u64(42));
        let b = sample_next(0, &[1, 2], &w, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
