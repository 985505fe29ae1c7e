//! Error types.
//!
//! Invalid input is rejected when a [`Catalog`](crate::catalog::Catalog) or
//! [`GeneticScheduler`](crate::scheduler::GeneticScheduler) is built. Once a
//! run starts, constraint violations are absorbed into the fitness score and
//! nothing in the evolutionary loop returns an error.

/// A malformed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no courses")]
    NoCourses,
    #[error("catalog has no teachers")]
    NoTeachers,
    #[error("catalog has no rooms")]
    NoRooms,
    #[error("slot universe has no days")]
    NoDays,
    #[error("slot universe has no time slots")]
    NoTimeSlots,
    #[error("duplicate course name: {0}")]
    DuplicateCourse(String),
    #[error("duplicate teacher name: {0}")]
    DuplicateTeacher(String),
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),
    #[error("course {0} must have at least one session per week")]
    ZeroSessions(String),
}

/// An invalid [`GaConfig`](crate::ga::GaConfig) parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("num_generations must be at least 1")]
    ZeroGenerations,
    #[error("tournament_size must be at least 1")]
    ZeroTournament,
    #[error("mutation_rate must be a finite value in [0, 1], got {0}")]
    MutationRate(f64),
    #[error("elitism_rate must be a finite value in [0, 1], got {0}")]
    ElitismRate(f64),
    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
    #[error("report_interval must be at least 1")]
    ZeroReportInterval,
}

/// Top-level error for the timetabling engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimetableError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A chromosome that does not cover the slot universe exactly.
    #[error("chromosome covers {actual} slots, universe has {expected}")]
    SlotCount { expected: usize, actual: usize },
    /// A session referencing a course, teacher or room outside the catalog.
    #[error("slot {slot} references an entity outside the catalog")]
    InvalidSession { slot: usize },
}
