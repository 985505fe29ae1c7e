//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. A problem plugs
//! in by implementing [`GaProblem`], which specifies how to create,
//! evaluate, crossover, and mutate individuals and which fitness counts as
//! optimal. The timetabling problem in [`crate::timetable`] is one such
//! implementation.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, budgets)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual, history and [`Termination`] reason
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, Termination};
pub use selection::{select_parents, tournament_select};
pub use types::{Fitness, GaProblem, Individual};
