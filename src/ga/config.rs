//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, termination conditions,
/// progress reporting and parallelism.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.num_generations, 1000);
/// assert_eq!(config.tournament_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_num_generations(2000)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Hard cap on the number of evaluated generations.
    pub num_generations: usize,

    /// Probability that a child receives one single-slot mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the sorted population copied unchanged into the next
    /// generation (0.0–1.0). The elite count is
    /// `floor(population_size × elitism_rate)`.
    pub elitism_rate: f64,

    /// Number of distinct individuals sampled per tournament.
    ///
    /// Clamped to the population size at selection time.
    pub tournament_size: usize,

    /// Number of generations without a new best before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Log progress every this many generations.
    pub report_interval: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Ignored when the crate is built without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked once per generation, so a run may overshoot the limit by
    /// one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 1000,
            mutation_rate: 0.05,
            elitism_rate: 0.1,
            tournament_size: 5,
            stagnation_limit: 0,
            report_interval: 100,
            parallel: cfg!(feature = "parallel"),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_report_interval(mut self, every: usize) -> Self {
        self.report_interval = every;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elitism_rate) as usize).min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.num_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.elitism_rate) {
            return Err(ConfigError::ElitismRate(self.elitism_rate));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.num_generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.elitism_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.stagnation_limit, 0);
        assert_eq!(config.report_interval, 100);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_num_generations(2000)
            .with_mutation_rate(0.1)
            .with_elitism_rate(0.2)
            .with_tournament_size(3)
            .with_stagnation_limit(100)
            .with_report_interval(10)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.num_generations, 2000);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.elitism_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.stagnation_limit, 100);
        assert_eq!(config.report_interval, 10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_num_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTournament));
    }

    #[test]
    fn test_validate_rates_set_directly() {
        let mut config = GaConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::MutationRate(_))));

        let mut config = GaConfig::default();
        config.elitism_rate = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::ElitismRate(1.5)));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GaConfig::default().with_time_limit_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
        assert!(GaConfig::default().with_time_limit_ms(1).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_report_interval() {
        let config = GaConfig::default().with_report_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroReportInterval));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elitism_rate(1.5)
            .with_mutation_rate(-2.0);
        assert!((config.elitism_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_elite_count_floors() {
        let config = GaConfig::default()
            .with_population_size(15)
            .with_elitism_rate(0.1);
        assert_eq!(config.elite_count(), 1);

        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism_rate(1.0);
        assert_eq!(config.elite_count(), 10);

        let config = GaConfig::default().with_elitism_rate(0.0);
        assert_eq!(config.elite_count(), 0);
    }
}
