//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of the construction/update loop.

use super::error::AcoError;

/// How each ant picks the vertex it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Every ant draws its own start vertex uniformly at random.
    #[default]
    Random,

    /// Every ant starts from the same vertex.
    Fixed(usize),
}

/// Configuration for the Ant Colony Optimization loop.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::{AcoConfig, StartPolicy};
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 10);
/// assert_eq!(config.num_iterations, 100);
/// assert_eq!(config.start, StartPolicy::Random);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::{AcoConfig, StartPolicy};
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.2)
///     .with_start(StartPolicy::Fixed(0))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants spawned per iteration.
    pub num_ants: usize,

    /// Number of construction/update rounds. The loop always runs all of them.
    pub num_iterations: usize,

    /// Pheromone exponent. Higher values exploit the trail more strongly.
    pub alpha: f64,

    /// Heuristic exponent applied to `1 / distance`. Higher values make
    /// short edges more attractive regardless of pheromone.
    pub beta: f64,

    /// Fraction of pheromone removed each round, in `[0, 1]`.
    pub evaporation_rate: f64,

    /// Deposit scale: each tour adds `q / tour.len()` to its edges.
    pub q: f64,

    /// Start vertex selection.
    pub start: StartPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to construct tours in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results for a given
    /// seed are identical either way.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            q: 10.0,
            start: StartPolicy::Random,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// A fixed start vertex is checked against the graph by the runner,
    /// since the vertex count is not known here.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants == 0 {
            return Err(invalid("num_ants must be at least 1"));
        }
        if self.num_iterations == 0 {
            return Err(invalid("num_iterations must be at least 1"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(invalid(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(invalid(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(invalid(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(invalid(format!(
                "q must be finite and positive, got {}",
                self.q
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AcoError {
    AcoError::InvalidConfig(message.into())
}
