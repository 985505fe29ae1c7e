//! Timetabling encoding on top of the generic GA.
//!
//! # Encoding
//!
//! A [`Chromosome`] holds one [`Assignment`] per slot of the catalog's slot
//! universe, indexed by the canonical day-major slot order. An assignment is
//! either empty or a [`Session`] of catalog indices (course, teacher, room),
//! so chromosomes reference the catalog rather than owning copies of it.
//!
//! # Operators
//!
//! - Initialization: independent uniform draw per slot over
//!   `{empty} ∪ courses × teachers × rooms`, unqualified pairings dropped to
//!   empty
//! - Crossover: single point in `[1, N-1]` over the canonical order
//! - Mutation: one slot redrawn from the initialization distribution
//!
//! Fitness is the weighted penalty computed by [`FitnessEvaluator`].

mod chromosome;
mod fitness;
mod problem;

pub use chromosome::{Assignment, Chromosome, Session};
pub use fitness::{
    FitnessEvaluator, PenaltyBreakdown, MISMATCH_PENALTY, ROOM_CONFLICT_PENALTY,
    SESSION_DEVIATION_WEIGHT, TEACHER_CONFLICT_PENALTY,
};
pub use problem::TimetableProblem;
