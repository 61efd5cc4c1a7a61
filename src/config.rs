//! Solver configuration.

/// Configuration for the ant colony search.
///
/// Defaults follow the common textbook parameterization for small
/// instances; none of them is proven optimal, and all are expected to be
/// tuned per problem class.
///
/// # Examples
///
/// ```
/// use aco_tsp::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_evaporation(0.5)
///     .with_epochs(20)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Pheromone deposit scale Q. Each ant deposits `Q / tour_length` on
    /// every edge of its tour.
    pub deposit: f64,

    /// Evaporation rate P in [0, 1]. Applied multiplicatively as `1 - P`
    /// to the whole pheromone matrix at every epoch end.
    pub evaporation: f64,

    /// Pheromone influence exponent (conventionally alpha). Higher values
    /// make ants follow established trails more strongly.
    pub pheromone_weight: f64,

    /// Desirability influence exponent (conventionally beta). Higher
    /// values make ants greedier toward short edges.
    pub desirability_weight: f64,

    /// Epochs per starting node. Every ant builds one tour per epoch
    /// before the pheromone matrix is updated once.
    pub epochs: usize,

    /// Ants per node: the colony size is `ants_per_node * n`.
    pub ants_per_node: usize,

    /// Whether to construct the epoch's tours in parallel using rayon.
    ///
    /// Requires the `parallel` cargo feature; ignored without it. Results
    /// are identical in both modes for a given seed.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            deposit: 3.0,
            evaporation: 0.8,
            pheromone_weight: 0.5,
            desirability_weight: 1.2,
            epochs: 5,
            ants_per_node: 2,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_evaporation(mut self, p: f64) -> Self {
        self.evaporation = p;
        self
    }

    pub fn with_pheromone_weight(mut self, alpha: f64) -> Self {
        self.pheromone_weight = alpha;
        self
    }

    pub fn with_desirability_weight(mut self, beta: f64) -> Self {
        self.desirability_weight = beta;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_ants_per_node(mut self, ants: usize) -> Self {
        self.ants_per_node = ants;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(format!("deposit must be positive, got {}", self.deposit));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if !self.pheromone_weight.is_finite() || self.pheromone_weight < 0.0 {
            return Err(format!(
                "pheromone_weight must be non-negative, got {}",
                self.pheromone_weight
            ));
        }
        if !self.desirability_weight.is_finite() || self.desirability_weight < 0.0 {
            return Err(format!(
                "desirability_weight must be non-negative, got {}",
                self.desirability_weight
            ));
        }
        if self.epochs == 0 {
            return Err("epochs must be at least 1".into());
        }
        if self.ants_per_node == 0 {
            return Err("ants_per_node must be at least 1".into());
        }
        Ok(())
    }
}
