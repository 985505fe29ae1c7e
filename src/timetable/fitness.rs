//! Penalty-based fitness.
//!
//! Fitness is a non-negative penalty; `0` is a fully valid timetable.
//!
//! | Violation | Penalty |
//! |-----------|---------|
//! | teacher already busy in the slot | 10 per clashing entry |
//! | room already busy in the slot | 10 per clashing entry |
//! | teacher not qualified for the course | 5 per entry |
//! | course scheduled more or less often than its target | 2 per session of difference |
//!
//! Double-booking is charged once for every entry after the first that
//! lands on an already-occupied (teacher, slot) or (room, slot) pair, so
//! the score does not depend on iteration order.

use std::collections::HashSet;
use std::fmt;

use super::chromosome::{Assignment, Chromosome};
use crate::catalog::{Catalog, Slot};

pub const TEACHER_CONFLICT_PENALTY: u64 = 10;
pub const ROOM_CONFLICT_PENALTY: u64 = 10;
pub const MISMATCH_PENALTY: u64 = 5;
pub const SESSION_DEVIATION_WEIGHT: u64 = 2;

/// Violation counts behind a fitness value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    /// Entries whose teacher was already busy in that slot.
    pub teacher_conflicts: u64,
    /// Entries whose room was already busy in that slot.
    pub room_conflicts: u64,
    /// Entries pairing a teacher with a course they cannot teach.
    pub mismatches: u64,
    /// Σ over courses of |scheduled sessions − sessions_per_week|.
    pub session_deviation: u64,
}

impl PenaltyBreakdown {
    /// The weighted fitness value.
    pub fn total(&self) -> u64 {
        self.teacher_conflicts * TEACHER_CONFLICT_PENALTY
            + self.room_conflicts * ROOM_CONFLICT_PENALTY
            + self.mismatches * MISMATCH_PENALTY
            + self.session_deviation * SESSION_DEVIATION_WEIGHT
    }

    /// True when no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for PenaltyBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fitness {} (teacher conflicts {}, room conflicts {}, mismatches {}, session deviation {})",
            self.total(),
            self.teacher_conflicts,
            self.room_conflicts,
            self.mismatches,
            self.session_deviation
        )
    }
}

/// Scores timetables against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Fitness of `chromosome`. Deterministic.
    pub fn fitness(&self, chromosome: &Chromosome) -> u64 {
        self.breakdown(chromosome).total()
    }

    /// Violation counts of `chromosome`.
    pub fn breakdown(&self, chromosome: &Chromosome) -> PenaltyBreakdown {
        self.score_entries(chromosome.iter(self.catalog))
    }

    /// Scores an arbitrary collection of `(slot, assignment)` entries.
    ///
    /// Unlike a chromosome, the entries may place several classes in the
    /// same slot (for example when merging timetables of parallel tracks),
    /// which is where double-booking penalties arise.
    ///
    /// # Panics
    /// Panics if a session references a course, teacher or room index
    /// outside the catalog.
    pub fn score_entries<I>(&self, entries: I) -> PenaltyBreakdown
    where
        I: IntoIterator<Item = (Slot, Assignment)>,
    {
        let catalog = self.catalog;
        let mut breakdown = PenaltyBreakdown::default();
        let mut busy_teachers: HashSet<(usize, Slot)> = HashSet::new();
        let mut busy_rooms: HashSet<(usize, Slot)> = HashSet::new();
        let mut session_counts = vec![0u64; catalog.courses().len()];

        for (slot, assignment) in entries {
            let Assignment::Session(session) = assignment else {
                continue;
            };

            if !busy_teachers.insert((session.teacher, slot)) {
                breakdown.teacher_conflicts += 1;
            }
            if !busy_rooms.insert((session.room, slot)) {
                breakdown.room_conflicts += 1;
            }
            if !catalog.is_qualified(session.teacher, session.course) {
                breakdown.mismatches += 1;
            }
            session_counts[session.course] += 1;
        }

        breakdown.session_deviation = catalog
            .courses()
            .iter()
            .zip(&session_counts)
            .map(|(course, &count)| count.abs_diff(u64::from(course.sessions_per_week)))
            .sum();

        breakdown
    }
}
