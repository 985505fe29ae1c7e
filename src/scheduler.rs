//! Timetable solving facade.
//!
//! [`GeneticScheduler`] validates its inputs up front, then runs the GA over
//! a [`TimetableProblem`]. The outcome is a [`Solution`]: either an optimal
//! (fitness 0) timetable, or a distinct negative result.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::warn;
use rand::Rng;

use crate::catalog::{Catalog, CatalogSpec};
use crate::error::TimetableError;
use crate::ga::{GaConfig, GaResult, GaRunner, Termination};
use crate::presenter::ScheduleGrid;
use crate::random::rng_from_seed;
use crate::timetable::{Chromosome, PenaltyBreakdown, TimetableProblem};

/// Outcome of [`GeneticScheduler::solve`].
#[derive(Debug, Clone)]
pub enum Solution {
    /// A timetable with no constraint violation.
    Optimal {
        schedule: Chromosome,
        /// Zero-based generation in which it was found.
        generation: usize,
    },
    /// The search stopped without reaching fitness 0.
    ///
    /// `best` is the best-ever timetable, kept so callers can inspect or
    /// present it explicitly; it is never reported as a solution.
    NotFound {
        best: Chromosome,
        best_fitness: u64,
        generations: usize,
        termination: Termination,
    },
}

impl Solution {
    fn from_result(result: GaResult<Chromosome>) -> Self {
        if result.is_optimal() {
            Solution::Optimal {
                schedule: result.best,
                generation: result.generations - 1,
            }
        } else {
            Solution::NotFound {
                best: result.best,
                best_fitness: result.best_fitness,
                generations: result.generations,
                termination: result.termination,
            }
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Solution::Optimal { .. })
    }

    /// The optimal timetable, or `None` if none was found.
    pub fn optimal(&self) -> Option<&Chromosome> {
        match self {
            Solution::Optimal { schedule, .. } => Some(schedule),
            Solution::NotFound { .. } => None,
        }
    }

    /// Consumes the result, keeping only an optimal timetable.
    pub fn into_optimal(self) -> Option<Chromosome> {
        match self {
            Solution::Optimal { schedule, .. } => Some(schedule),
            Solution::NotFound { .. } => None,
        }
    }

    /// The best timetable seen, optimal or not.
    pub fn best(&self) -> &Chromosome {
        match self {
            Solution::Optimal { schedule, .. } => schedule,
            Solution::NotFound { best, .. } => best,
        }
    }

    /// Fitness of [`best`](Self::best).
    pub fn fitness(&self) -> u64 {
        match self {
            Solution::Optimal { .. } => 0,
            Solution::NotFound { best_fitness, .. } => *best_fitness,
        }
    }
}

/// Genetic-algorithm timetable scheduler.
///
/// # Example
/// ```
/// use u_timetable::catalog::sample;
/// use u_timetable::ga::GaConfig;
/// use u_timetable::scheduler::GeneticScheduler;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_num_generations(500)
///     .with_seed(7);
/// let scheduler = GeneticScheduler::from_spec(sample::small(), config).unwrap();
/// let solution = scheduler.solve();
/// if let Some(schedule) = solution.optimal() {
///     println!("{}", scheduler.grid(schedule));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GeneticScheduler {
    problem: TimetableProblem,
    config: GaConfig,
}

impl GeneticScheduler {
    /// Creates a scheduler, rejecting an invalid configuration.
    pub fn new(catalog: Catalog, config: GaConfig) -> Result<Self, TimetableError> {
        config.validate()?;
        Ok(Self {
            problem: TimetableProblem::new(catalog),
            config,
        })
    }

    /// Validates `spec` into a catalog and creates a scheduler.
    pub fn from_spec(spec: CatalogSpec, config: GaConfig) -> Result<Self, TimetableError> {
        Self::new(Catalog::new(spec)?, config)
    }

    pub fn catalog(&self) -> &Catalog {
        self.problem.catalog()
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    /// Runs the GA with an RNG seeded from the configuration.
    pub fn solve(&self) -> Solution {
        self.solve_with_rng(&mut rng_from_seed(self.config.seed))
    }

    /// Runs the GA drawing every random decision from `rng`.
    pub fn solve_with_rng<R: Rng>(&self, rng: &mut R) -> Solution {
        Solution::from_result(self.evolve(rng, None))
    }

    /// Runs the GA until optimal, out of budget, or `cancel` is raised.
    pub fn solve_with_cancel(&self, cancel: Arc<AtomicBool>) -> Solution {
        let mut rng = rng_from_seed(self.config.seed);
        Solution::from_result(self.evolve(&mut rng, Some(&cancel)))
    }

    /// Runs the GA and returns the full result, including fitness history.
    pub fn evolve<R: Rng>(&self, rng: &mut R, cancel: Option<&AtomicBool>) -> GaResult<Chromosome> {
        let result = GaRunner::run_with_rng(&self.problem, &self.config, rng, cancel);
        if !result.is_optimal() {
            warn!(
                "no optimal timetable after {} generations ({:?}); best fitness {}",
                result.generations, result.termination, result.best_fitness
            );
        }
        result
    }

    /// Penalty breakdown of `schedule` against this scheduler's catalog.
    pub fn breakdown(&self, schedule: &Chromosome) -> PenaltyBreakdown {
        self.problem.evaluator().breakdown(schedule)
    }

    /// Day × time grid view of `schedule`.
    pub fn grid(&self, schedule: &Chromosome) -> ScheduleGrid {
        ScheduleGrid::new(self.catalog(), schedule)
    }
}
