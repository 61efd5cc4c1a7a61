//! Pheromone deposits, evaporation, and batched reinforcement.

use crate::matrix::SquareMatrix;

/// Builds the pheromone deposit matrix for one tour.
///
/// Every directed edge the tour traverses, including the closing edge back
/// to the first node, receives `q / length`; all other entries stay zero.
/// A non-positive tour length deposits nothing (a zero-length cycle carries
/// no meaningful reinforcement signal and `q / 0` would poison the matrix).
pub fn deposit_matrix(tour: &[usize], q: f64, length: f64) -> SquareMatrix {
    let n = tour.len();
    let mut deposit = SquareMatrix::zeros(n);
    if length <= 0.0 {
        return deposit;
    }
    let amount = q / length;
    for pair in tour.windows(2) {
        deposit.set(pair[0], pair[1], amount);
    }
    if let (Some(&last), Some(&first)) = (tour.last(), tour.first()) {
        deposit.set(last, first, amount);
    }
    deposit
}

/// Applies one epoch-end pheromone update.
///
/// The entire matrix, diagonal included, is first decayed by `1 - rho`,
/// then every deposit matrix collected from the epoch's ants is added in
/// one batch. No ant's deposit is visible before the batch is applied, so
/// constructions within an epoch never observe each other.
pub fn evaporate_and_reinforce(pheromone: &mut SquareMatrix, deposits: &[SquareMatrix], rho: f64) {
    pheromone.scale(1.0 - rho);
    for deposit in deposits {
        pheromone.add_assign(deposit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_covers_all_tour_edges() {
        let tour = [0, 2, 1, 3];
        let d = deposit_matrix(&tour, 3.0, 6.0);
        assert_eq!(d.get(0, 2), 0.5);
        assert_eq!(d.get(2, 1), 0.5);
        assert_eq!(d.get(1, 3), 0.5);
        assert_eq!(d.get(3, 0), 0.5); // closing edge
        assert_eq!(d.get(0, 1), 0.0);
    }

    #[test]
    fn test_deposit_sum_is_n_times_q_over_l() {
        let tour = [0, 1, 2, 3, 4];
        let q = 3.0;
        let length = 12.0;
        let d = deposit_matrix(&tour, q, length);
        let expected = tour.len() as f64 * q / length;
        assert!((d.sum() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_zero_length_is_empty() {
        let d = deposit_matrix(&[0, 1, 2], 3.0, 0.0);
        assert_eq!(d.sum(), 0.0);
    }

    #[test]
    fn test_full_evaporation_zeroes_matrix() {
        let mut ph = SquareMatrix::ones(3);
        evaporate_and_reinforce(&mut ph, &[], 1.0);
        assert_eq!(ph.sum(), 0.0);
    }

    #[test]
    fn test_no_evaporation_preserves_matrix() {
        let mut ph = SquareMatrix::ones(3);
        ph.set(1, 2, 4.0);
        let before = ph.clone();
        evaporate_and_reinforce(&mut ph, &[], 0.0);
        assert_eq!(ph, before);
    }

    #[test]
    fn test_deposits_are_batched_after_evaporation() {
        let mut ph = SquareMatrix::ones(2);
        let a = deposit_matrix(&[0, 1], 3.0, 10.0);
        let b = deposit_matrix(&[1, 0], 3.0, 6.0);
        evaporate_and_reinforce(&mut ph, &[a, b], 0.5);
        // 1.0 * 0.5 + 0.3 + 0.5 on both directed edges.
        assert!((ph.get(0, 1) - 1.3).abs() < 1e-12);
        assert!((ph.get(1, 0) - 1.3).abs() < 1e-12);
        // Diagonal evaporates too.
        assert!((ph.get(0, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pheromone_stays_non_negative() {
        let mut ph = SquareMatrix::ones(4);
        for _ in 0..20 {
            let d = deposit_matrix(&[0, 1, 2, 3], 3.0, 8.0);
            evaporate_and_reinforce(&mut ph, &[d], 0.8);
        }
        for i in 0..4 {
            for j in 0..4 {
                assert!(ph.get(i, j) >= 0.0);
            }
        }
    }
}
