//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → sort → elitism → selection → crossover →
//! mutation → repeat, until the problem reports an optimal fitness or the
//! generation budget runs out.

use super::config::GaConfig;
use super::selection::select_parents;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best-ever fitness satisfied [`GaProblem::is_optimal`].
    Optimal,
    /// All `num_generations` generations were evaluated.
    Budget,
    /// No improvement for `stagnation_limit` generations.
    Stagnated,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock limit elapsed.
    TimeLimit,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-ever fitness after each evaluated generation. Non-increasing.
    pub fitness_history: Vec<f64>,
}

impl<I: Individual> GaResult<I> {
    /// Whether the run ended on an optimal individual.
    pub fn is_optimal(&self) -> bool {
        self.termination == Termination::Optimal
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop after evaluating the current generation and return the best
    /// solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult<P::Individual> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random stream.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> GaResult<P::Individual> {
        config.validate().expect("invalid GaConfig");

        let started = Instant::now();
        let elite_count = config.elite_count();

        info!(
            "starting GA: population {}, up to {} generations",
            config.population_size, config.num_generations
        );

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut *rng))
            .collect();

        let mut best: Option<P::Individual> = None;
        let mut best_fitness: <P::Individual as Individual>::Fitness = Fitness::worst();
        let mut fitness_history = Vec::with_capacity(config.num_generations);
        let mut stagnation_counter = 0usize;
        let mut termination = Termination::Budget;
        let mut generations = 0;

        for gen in 0..config.num_generations {
            evaluate_population(problem, &mut population, config.parallel);
            sort_by_fitness(&mut population);
            generations = gen + 1;

            let gen_fitness = population[0].fitness();
            if best.is_none() || gen_fitness < best_fitness {
                best = Some(population[0].clone());
                best_fitness = gen_fitness;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(gen, best_fitness);

            if problem.is_optimal(best_fitness) {
                info!("optimal individual found at generation {gen}");
                termination = Termination::Optimal;
                break;
            }

            if gen % config.report_interval == 0 {
                info!("generation {gen}: best fitness {best_fitness:?}");
            }

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                termination = Termination::Stagnated;
                break;
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(limit) {
                    termination = Termination::TimeLimit;
                    break;
                }
            }

            // The last generation's offspring would never be scored.
            if generations == config.num_generations {
                break;
            }

            population = next_generation(problem, config, &population, elite_count, rng);
        }

        let best = best.expect("at least one generation is evaluated");
        let best_fitness = best.fitness();
        info!("GA finished after {generations} generations: best fitness {best_fitness:?}");
        debug!(
            "termination {termination:?} after {} ms",
            started.elapsed().as_millis()
        );

        GaResult {
            best,
            best_fitness,
            generations,
            termination,
            fitness_history,
        }
    }
}

/// Builds the next generation from a population sorted best first.
///
/// The top `elite_count` individuals are copied unchanged. The rest is
/// filled with crossover children, each mutated with probability
/// `config.mutation_rate`; when only one place is left, the second child of
/// the last pair is dropped.
pub(crate) fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    elite_count: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    let size = config.population_size;
    let mut next_gen: Vec<P::Individual> = Vec::with_capacity(size);
    next_gen.extend_from_slice(&population[..elite_count.min(population.len())]);

    while next_gen.len() < size {
        let (p1, p2) = select_parents(population, config.tournament_size, rng);
        let (mut child1, mut child2) =
            problem.crossover(&population[p1], &population[p2], rng);

        for child in [&mut child1, &mut child2] {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                problem.mutate(child, rng);
                child.set_fitness(Fitness::worst());
            }
        }

        next_gen.push(child1);
        if next_gen.len() < size {
            next_gen.push(child2);
        }
    }

    next_gen
}

/// Sorts ascending by fitness (best first). Stable for equal scores.
fn sort_by_fitness<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Evaluate every individual whose cached fitness is stale.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population
            .par_iter_mut()
            .filter(|ind| !ind.is_evaluated())
            .for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut().filter(|ind| !ind.is_evaluated()) {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- OneMax: minimize the number of false bits ----

    #[derive(Clone, Debug, PartialEq)]
    struct BitString {
        bits: Vec<bool>,
        fitness: u64,
    }

    impl Individual for BitString {
        type Fitness = u64;
        fn fitness(&self) -> u64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: u64) {
            self.fitness = f;
        }
    }

    struct OneMaxProblem {
        n: usize,
        stop_at_optimum: bool,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                stop_at_optimum: true,
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: (0..self.n).map(|_| rng.random_bool(0.5)).collect(),
                fitness: u64::MAX,
            }
        }

        fn evaluate(&self, ind: &BitString) -> u64 {
            ind.bits.iter().filter(|&&b| !b).count() as u64
        }

        fn crossover<R: Rng>(
            &self,
            p1: &BitString,
            p2: &BitString,
            rng: &mut R,
        ) -> (BitString, BitString) {
            let point = rng.random_range(1..self.n);
            let mut c1 = p1.bits.clone();
            let mut c2 = p2.bits.clone();
            c1[point..].copy_from_slice(&p2.bits[point..]);
            c2[point..].copy_from_slice(&p1.bits[point..]);
            (
                BitString {
                    bits: c1,
                    fitness: u64::MAX,
                },
                BitString {
                    bits: c2,
                    fitness: u64::MAX,
                },
            )
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }

        fn is_optimal(&self, fitness: u64) -> bool {
            self.stop_at_optimum && fitness == 0
        }
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_num_generations(300)
            .with_mutation_rate(0.3)
            .with_seed(42)
            .with_parallel(false)
    }

    #[test]
    fn test_onemax_reaches_optimum() {
        let problem = OneMaxProblem::new(20);
        let result = GaRunner::run(&problem, &config());

        assert_eq!(result.termination, Termination::Optimal);
        assert!(result.is_optimal());
        assert_eq!(result.best_fitness, 0);
        assert!(result.best.bits.iter().all(|&b| b));
        assert_eq!(result.fitness_history.len(), result.generations);
        assert_eq!(*result.fitness_history.last().unwrap(), 0.0);
    }

    #[test]
    fn test_budget_exhaustion() {
        let problem = OneMaxProblem {
            n: 20,
            stop_at_optimum: false,
        };
        let config = config().with_num_generations(25);
        let result = GaRunner::run(&problem, &config);

        assert_eq!(result.termination, Termination::Budget);
        assert!(!result.is_optimal());
        assert_eq!(result.generations, 25);
        assert_eq!(result.fitness_history.len(), 25);
    }

    #[test]
    fn test_single_generation_budget() {
        let problem = OneMaxProblem::new(64);
        let config = config().with_num_generations(1);
        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.generations, 1);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_best_fitness_is_monotonic() {
        let problem = OneMaxProblem::new(30);
        let config = config()
            .with_elitism_rate(0.0)
            .with_num_generations(80);
        let result = GaRunner::run(&problem, &config);

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-ever fitness must not increase: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMaxProblem::new(24);
        let config = config().with_num_generations(40);
        let a = GaRunner::run(&problem, &config);
        let b = GaRunner::run(&problem, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_run_with_rng_ignores_config_seed() {
        let problem = OneMaxProblem::new(24);
        let config = config().with_num_generations(10);
        let a = GaRunner::run_with_rng(&problem, &config, &mut create_rng(42), None);
        let b = GaRunner::run(&problem, &config);
        assert_eq!(a.best, b.best);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let problem = OneMaxProblem::new(24);
        let sequential = GaRunner::run(&problem, &config().with_num_generations(30));
        let parallel = GaRunner::run(
            &problem,
            &config().with_num_generations(30).with_parallel(true),
        );
        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.fitness_history, parallel.fitness_history);
    }

    #[test]
    fn test_cancellation() {
        let problem = OneMaxProblem {
            n: 20,
            stop_at_optimum: false,
        };
        let config = config().with_num_generations(10_000);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = GaRunner::run_with_cancel(&problem, &config, Some(cancel));

        assert_eq!(result.termination, Termination::Cancelled);
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_stagnation_termination() {
        let problem = OneMaxProblem {
            n: 5,
            stop_at_optimum: false,
        };
        let config = config()
            .with_num_generations(1000)
            .with_stagnation_limit(10);
        let result = GaRunner::run(&problem, &config);

        assert_eq!(result.termination, Termination::Stagnated);
        assert!(result.generations < 1000);
    }

    struct SlowProblem;

    impl GaProblem for SlowProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, _rng: &mut R) -> BitString {
            BitString {
                bits: vec![false],
                fitness: u64::MAX,
            }
        }

        fn evaluate(&self, _ind: &BitString) -> u64 {
            std::thread::sleep(std::time::Duration::from_millis(2));
            1
        }
    }

    #[test]
    fn test_time_limit() {
        let config = config()
            .with_population_size(2)
            .with_num_generations(10_000)
            .with_time_limit_ms(1);
        let result = GaRunner::run(&SlowProblem, &config);
        assert_eq!(result.termination, Termination::TimeLimit);
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_default_operators() {
        let config = config()
            .with_population_size(4)
            .with_num_generations(5);
        let result = GaRunner::run(&SlowProblem, &config);
        assert_eq!(result.generations, 5);
        assert_eq!(result.best_fitness, 1);
    }

    #[test]
    fn test_next_generation_size_and_elites() {
        let problem = OneMaxProblem::new(16);
        let config = config()
            .with_population_size(7)
            .with_elitism_rate(0.3);
        let mut rng = create_rng(5);

        let mut population: Vec<BitString> = (0..7)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(&problem, &mut population, false);
        sort_by_fitness(&mut population);

        let next = next_generation(&problem, &config, &population, config.elite_count(), &mut rng);
        assert_eq!(next.len(), 7);
        assert_eq!(next[0], population[0]);
        assert_eq!(next[1], population[1]);
    }

    struct CountingProblem {
        inner: OneMaxProblem,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl GaProblem for CountingProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            self.inner.create_individual(rng)
        }

        fn evaluate(&self, ind: &BitString) -> u64 {
            self.inner.evaluate(ind)
        }

        fn on_generation(&self, generation: usize, _best_fitness: u64) {
            assert_eq!(generation, self.calls.fetch_add(1, Ordering::Relaxed));
        }
    }

    #[test]
    fn test_on_generation_called_once_per_generation() {
        let problem = CountingProblem {
            inner: OneMaxProblem {
                n: 8,
                stop_at_optimum: false,
            },
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let result = GaRunner::run(&problem, &config().with_num_generations(12));
        assert_eq!(problem.calls.load(Ordering::Relaxed), result.generations);
        assert_eq!(result.generations, 12);
    }

    struct MutationCounter {
        inner: OneMaxProblem,
        mutations: std::sync::atomic::AtomicUsize,
    }

    impl GaProblem for MutationCounter {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            self.inner.create_individual(rng)
        }

        fn evaluate(&self, ind: &BitString) -> u64 {
            self.inner.evaluate(ind)
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            self.mutations.fetch_add(1, Ordering::Relaxed);
            self.inner.mutate(ind, rng);
        }
    }

    fn count_mutations(rate: f64) -> (usize, Vec<BitString>) {
        let problem = MutationCounter {
            inner: OneMaxProblem::new(16),
            mutations: std::sync::atomic::AtomicUsize::new(0),
        };
        let config = config()
            .with_population_size(10)
            .with_elitism_rate(0.2)
            .with_mutation_rate(rate);
        let mut rng = create_rng(9);

        let mut population: Vec<BitString> = (0..10)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(&problem, &mut population, false);
        sort_by_fitness(&mut population);

        let next = next_generation(&problem, &config, &population, config.elite_count(), &mut rng);
        (problem.mutations.load(Ordering::Relaxed), next)
    }

    #[test]
    fn test_zero_mutation_rate_never_mutates() {
        let (mutations, next) = count_mutations(0.0);
        assert_eq!(mutations, 0);
        assert_eq!(next.len(), 10);
        // Children are clones of evaluated parents, so none are stale.
        assert!(next.iter().all(|ind| ind.is_evaluated()));
    }

    #[test]
    fn test_full_mutation_rate_mutates_every_child() {
        let (mutations, next) = count_mutations(1.0);
        assert_eq!(next.len(), 10);
        // Two elites, eight children in four full pairs.
        assert_eq!(mutations, 8);
        assert!(next[..2].iter().all(|ind| ind.is_evaluated()));
        assert!(next[2..].iter().all(|ind| !ind.is_evaluated()));
    }

    #[test]
    fn test_full_elitism_freezes_population() {
        let problem = OneMaxProblem {
            n: 16,
            stop_at_optimum: false,
        };
        let config = config()
            .with_population_size(6)
            .with_elitism_rate(1.0)
            .with_num_generations(10);
        let result = GaRunner::run(&problem, &config);
        let first = result.fitness_history[0];
        assert!(result.fitness_history.iter().all(|&f| f == first));
    }
}
