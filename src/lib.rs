//! Ant Colony Optimization for the Travelling Salesman Problem.
//!
//! Computes an approximate solution to the symmetric or asymmetric TSP:
//! a colony of ants repeatedly constructs tours by probabilistic edge
//! selection, and good tours reinforce a pheromone trail that biases
//! later constructions.
//!
//! # Algorithm
//!
//! The search restarts once per node: each starting node gets a fresh
//! all-ones pheromone matrix evolved over a small number of epochs. Within
//! an epoch every ant builds a complete tour from the frozen transition
//! weights `pheromone^alpha * desirability^beta`, where desirability is
//! the static inverse-distance matrix; the pheromone matrix is then
//! evaporated and reinforced once from the whole epoch's batch of tours.
//! Restarting per node deliberately trades per-start convergence depth for
//! exploration breadth, which suits the shallow default epoch count.
//!
//! # Usage
//!
//! ```
//! use aco_tsp::{AcoConfig, AcoRunner, TspInstance};
//!
//! let instance = TspInstance::from_rows(&[
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![1.0, 0.0, 4.0, 5.0],
//!     vec![2.0, 4.0, 0.0, 6.0],
//!     vec![3.0, 5.0, 6.0, 0.0],
//! ]).unwrap();
//!
//! let config = AcoConfig::default().with_seed(42);
//! let result = AcoRunner::run(&instance, &config);
//! println!("best tour length: {}", result.best_length);
//! ```
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

pub mod config;
pub mod error;
pub mod instance;
pub mod matrix;
pub mod pheromone;
pub mod runner;
pub mod sampling;
pub mod tour;

pub use config::AcoConfig;
pub use error::AcoError;
pub use instance::TspInstance;
pub use matrix::SquareMatrix;
pub use runner::{AcoResult, AcoRunner};
