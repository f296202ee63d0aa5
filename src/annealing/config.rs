//! Annealing configuration.

/// Configuration for the simulated-annealing path search.
///
/// # Examples
///
/// ```
/// use pathlab::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_max_iterations(1000)
///     .with_initial_temperature(20.0)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Maximum number of optimization iterations.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Multiplicative temperature decay applied every iteration.
    /// Must be in (0, 1).
    pub cooling_rate: f64,

    /// Penalty weight added to the energy per constraint violation
    /// (wrong endpoints, traversed pairs that are not real edges).
    pub constraint_penalty: f64,

    /// Iterations without improvement of the best solution before the
    /// search may stop early (only once the best path is valid).
    pub stability_threshold: usize,

    /// Random seed (`None` for a fresh random seed per run).
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            initial_temperature: 10.0,
            cooling_rate: 0.98,
            constraint_penalty: 1000.0,
            stability_threshold: 50,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the per-iteration temperature decay factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the per-violation energy penalty.
    pub fn with_constraint_penalty(mut self, penalty: f64) -> Self {
        self.constraint_penalty = penalty;
        self
    }

    /// Sets the stability threshold for early termination.
    pub fn with_stability_threshold(mut self, n: usize) -> Self {
        self.stability_threshold = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.constraint_penalty < 0.0 {
            return Err("constraint_penalty must be non-negative".into());
        }
        if self.stability_threshold == 0 {
            return Err("stability_threshold must be positive".into());
        }
        Ok(())
    }
}
