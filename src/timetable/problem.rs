//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for weekly class timetabling: random
//! initialization with a qualification pre-filter, penalty fitness,
//! single-point crossover over the canonical slot order, and single-slot
//! mutation.

use rand::Rng;

use super::chromosome::{Assignment, Chromosome};
use super::fitness::FitnessEvaluator;
use crate::catalog::Catalog;
use crate::error::TimetableError;
use crate::ga::GaProblem;

/// GA problem over a validated [`Catalog`].
///
/// # Example
/// ```
/// use u_timetable::catalog::sample;
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::timetable::TimetableProblem;
///
/// let catalog = sample::small().build().unwrap();
/// let problem = TimetableProblem::new(catalog);
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_num_generations(20)
///     .with_seed(1);
/// let result = GaRunner::run(&problem, &config);
/// assert!(result.generations <= 20);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    catalog: Catalog,
}

impl TimetableProblem {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::new(&self.catalog)
    }

    /// Draws uniformly from `{empty} ∪ courses × teachers × rooms`.
    ///
    /// A triple whose teacher is not qualified for its course is replaced
    /// by [`Assignment::Empty`].
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        let catalog = &self.catalog;
        let triples = catalog.triple_count();
        let draw = rng.random_range(0..=triples);
        if draw == triples {
            return Assignment::Empty;
        }

        let rooms = catalog.rooms().len();
        let teachers = catalog.teachers().len();
        let course = draw / (teachers * rooms);
        let teacher = (draw / rooms) % teachers;
        let room = draw % rooms;

        if catalog.is_qualified(teacher, course) {
            Assignment::session(course, teacher, room)
        } else {
            Assignment::Empty
        }
    }

    /// Builds a chromosome with an independent random draw per slot.
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        let genes = (0..self.catalog.slot_count())
            .map(|_| self.random_assignment(rng))
            .collect();
        Chromosome::from_assignments(genes)
    }

    /// Single-point crossover at a fixed `point`.
    ///
    /// The first child takes `parent1` below `point` and `parent2` from
    /// `point` on; the second child takes the complementary halves.
    ///
    /// # Panics
    /// Panics if `point` exceeds the universe size or the parents differ
    /// in length.
    pub fn crossover_at(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        point: usize,
    ) -> (Chromosome, Chromosome) {
        let a = parent1.assignments();
        let b = parent2.assignments();
        assert_eq!(a.len(), b.len(), "parents must cover the same universe");

        let child1 = [&a[..point], &b[point..]].concat();
        let child2 = [&b[..point], &a[point..]].concat();
        (
            Chromosome::from_assignments(child1),
            Chromosome::from_assignments(child2),
        )
    }

    /// Redraws one uniformly chosen slot and returns its index.
    pub fn mutate_slot<R: Rng>(&self, chromosome: &mut Chromosome, rng: &mut R) -> usize {
        let index = rng.random_range(0..chromosome.slot_count());
        let assignment = self.random_assignment(rng);
        chromosome.set(index, assignment);
        index
    }

    /// Builds a chromosome from externally supplied assignments.
    ///
    /// Checks that exactly one assignment is given per slot and that every
    /// session references existing catalog entries.
    pub fn chromosome_from(&self, genes: Vec<Assignment>) -> Result<Chromosome, TimetableError> {
        let catalog = &self.catalog;
        if genes.len() != catalog.slot_count() {
            return Err(TimetableError::SlotCount {
                expected: catalog.slot_count(),
                actual: genes.len(),
            });
        }
        let invalid = genes.iter().position(|a| {
            a.as_session().is_some_and(|s| {
                s.course >= catalog.courses().len()
                    || s.teacher >= catalog.teachers().len()
                    || s.room >= catalog.rooms().len()
            })
        });
        if let Some(slot) = invalid {
            return Err(TimetableError::InvalidSession { slot });
        }
        Ok(Chromosome::from_assignments(genes))
    }
}

impl GaProblem for TimetableProblem {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        self.random_chromosome(rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> u64 {
        self.evaluator().fitness(individual)
    }

    /// Crossover point is uniform in `[1, N-1]`. A one-slot universe has no
    /// interior point, so the parents are copied.
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = self.catalog.slot_count();
        if n < 2 {
            return (parent1.clone(), parent2.clone());
        }
        let point = rng.random_range(1..n);
        self.crossover_at(parent1, parent2, point)
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        self.mutate_slot(individual, rng);
    }

    fn is_optimal(&self, fitness: u64) -> bool {
        fitness == 0
    }
}
