//! Slot-indexed timetable chromosome.
//!
//! A chromosome is a fixed-length vector with one [`Assignment`] per slot of
//! the universe, in the catalog's canonical order. The length is set at
//! construction and never changes, so every chromosome covers the whole
//! universe with no missing or repeated slot.

use crate::catalog::{Catalog, Slot};
use crate::ga::{Fitness, Individual};

/// A scheduled class: catalog indices of the course, teacher and room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub course: usize,
    pub teacher: usize,
    pub room: usize,
}

/// The content of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Assignment {
    /// Nothing scheduled.
    #[default]
    Empty,
    /// One class.
    Session(Session),
}

impl Assignment {
    pub fn session(course: usize, teacher: usize, room: usize) -> Self {
        Assignment::Session(Session {
            course,
            teacher,
            room,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Assignment::Empty)
    }

    pub fn as_session(&self) -> Option<&Session> {
        match self {
            Assignment::Session(s) => Some(s),
            Assignment::Empty => None,
        }
    }
}

/// A candidate weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<Assignment>,
    fitness: u64,
}

impl Chromosome {
    /// Creates a chromosome with every one of `slot_count` slots empty.
    pub fn empty(slot_count: usize) -> Self {
        Self::from_assignments(vec![Assignment::Empty; slot_count])
    }

    /// Creates an unevaluated chromosome from assignments in canonical
    /// slot order.
    ///
    /// The length is not checked here; use
    /// [`TimetableProblem::chromosome_from`](super::TimetableProblem::chromosome_from)
    /// for input that did not come from the GA operators.
    pub fn from_assignments(genes: Vec<Assignment>) -> Self {
        Self {
            genes,
            fitness: u64::worst(),
        }
    }

    /// Number of slots covered (the universe size).
    pub fn slot_count(&self) -> usize {
        self.genes.len()
    }

    /// All assignments in canonical slot order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.genes
    }

    /// Assignment at canonical index `index`.
    pub fn get(&self, index: usize) -> Option<Assignment> {
        self.genes.get(index).copied()
    }

    /// Replaces the assignment at canonical index `index` and invalidates
    /// the cached fitness.
    ///
    /// # Panics
    /// Panics if `index` is outside the universe.
    pub fn set(&mut self, index: usize, assignment: Assignment) {
        self.genes[index] = assignment;
        self.fitness = u64::worst();
    }

    /// Assignment at `slot`, or `None` if the slot is outside the universe.
    pub fn assignment_at(&self, catalog: &Catalog, slot: Slot) -> Option<Assignment> {
        catalog.slot_index(slot).and_then(|i| self.get(i))
    }

    /// `(slot, assignment)` pairs in canonical order.
    pub fn iter<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (Slot, Assignment)> + 'a {
        catalog.slots().iter().copied().zip(self.genes.iter().copied())
    }

    /// Number of non-empty slots.
    pub fn scheduled_count(&self) -> usize {
        self.genes.iter().filter(|a| !a.is_empty()).count()
    }
}

impl Individual for Chromosome {
    type Fitness = u64;

    fn fitness(&self) -> u64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }
}
