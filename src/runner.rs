//! Colony search execution loop.
//!
//! [`AcoRunner`] orchestrates the complete search: for every starting node,
//! a fresh pheromone matrix is evolved over a fixed number of epochs; in
//! each epoch the whole colony constructs tours independently, and the
//! pheromone matrix is updated once from the batch of results.

use crate::config::AcoConfig;
use crate::instance::TspInstance;
use crate::matrix::{desirability_matrix, SquareMatrix};
use crate::pheromone::{deposit_matrix, evaporate_and_reinforce};
use crate::sampling::transition_matrix;
use crate::tour::build_tour;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an ant colony search run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Length of the best tour found.
    pub best_length: f64,

    /// The best tour itself, as a visiting order closed implicitly back to
    /// its first node. `None` only if the run was cancelled before any
    /// tour was constructed.
    pub best_tour: Option<Vec<usize>>,

    /// Total number of tours constructed.
    pub tours_built: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best length at the end of each epoch, across all starting nodes.
    pub length_history: Vec<f64>,
}

/// Executes the ant colony search.
///
/// # Usage
///
/// ```
/// use aco_tsp::{AcoConfig, AcoRunner, TspInstance};
///
/// let instance = TspInstance::from_rows(&[
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&instance, &config);
/// assert_eq!(result.best_length, 10.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(instance: &TspInstance, config: &AcoConfig) -> AcoResult {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is only observed at starting-node and epoch boundaries,
    /// where the pheromone matrix is in a fully-updated state; the best
    /// result found so far is returned.
    pub fn run_with_cancel(
        instance: &TspInstance,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let n = instance.n();
        let ants = config.ants_per_node * n;
        let desirability = desirability_matrix(instance.distances());

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        // Loose upper bound: no tour of n edges can exceed it.
        let mut best_length = n as f64 * instance.distances().max_entry();
        let mut best_tour: Option<Vec<usize>> = None;
        let mut tours_built = 0usize;
        let mut cancelled = false;
        let mut length_history = Vec::with_capacity(n * config.epochs);

        'starts: for start in 0..n {
            if is_cancelled(&cancel) {
                cancelled = true;
                break;
            }

            // Each starting node gets a fresh trail.
            let mut pheromone = SquareMatrix::ones(n);

            for _ in 0..config.epochs {
                if is_cancelled(&cancel) {
                    cancelled = true;
                    break 'starts;
                }

                let transition = transition_matrix(
                    &pheromone,
                    &desirability,
                    config.pheromone_weight,
                    config.desirability_weight,
                );

                // Per-ant RNG streams derived up front so sequential and
                // parallel construction produce identical results.
                let seeds: Vec<u64> = (0..ants).map(|_| rng.random()).collect();
                let results = construct_colony(&seeds, config.parallel, |seed| {
                    let mut ant_rng = ChaCha8Rng::seed_from_u64(seed);
                    let tour = build_tour(start, &transition, &mut ant_rng);
                    let length = instance.tour_length(&tour);
                    (tour, length)
                });

                let mut deposits = Vec::with_capacity(ants);
                for (tour, length) in results {
                    deposits.push(deposit_matrix(&tour, config.deposit, length));
                    tours_built += 1;

                    if length < best_length {
                        best_length = length;
                        best_tour = Some(tour);
                    } else if best_tour.is_none() {
                        // First tour ever; it can at most tie the bound.
                        best_tour = Some(tour);
                    }
                }

                evaporate_and_reinforce(&mut pheromone, &deposits, config.evaporation);
                length_history.push(best_length);
            }
        }

        AcoResult {
            best_length,
            best_tour,
            tours_built,
            cancelled,
            length_history,
        }
    }
}

fn is_cancelled(cancel: &Option<Arc<AtomicBool>>) -> bool {
    cancel
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Constructs every ant's tour for one epoch.
///
/// Constructions are mutually independent given the epoch's frozen
/// transition matrix; with the `parallel` feature and flag they fan out
/// across rayon workers and join before the pheromone update.
fn construct_colony<F>(seeds: &[u64], parallel: bool, construct: F) -> Vec<(Vec<usize>, f64)>
where
    F: Fn(u64) -> (Vec<usize>, f64) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return seeds.par_iter().map(|&seed| construct(seed)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    seeds.iter().map(|&seed| construct(seed)).collect()
}
