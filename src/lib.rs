//! Weekly class timetabling with a genetic algorithm.
//!
//! Searches the space of slot → (course, teacher, room) assignments for a
//! timetable with no constraint violations:
//!
//! - **Catalog** ([`catalog`]): courses, teachers, rooms and the day × time
//!   slot universe, validated once and referenced by index.
//! - **Genetic Algorithm** ([`ga`]): generic generational loop with
//!   tournament selection, elitism, early stop on an optimal individual,
//!   and cancellation / time-limit escape hatches.
//! - **Timetable encoding** ([`timetable`]): slot-indexed chromosomes,
//!   penalty fitness, single-point crossover and single-slot mutation.
//! - **Scheduler** ([`scheduler`]): validated entry point returning a
//!   [`Solution`](scheduler::Solution).
//! - **Presenter** ([`presenter`]): day × time text grid.
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog::sample;
//! use u_timetable::ga::GaConfig;
//! use u_timetable::scheduler::GeneticScheduler;
//!
//! let config = GaConfig::default().with_population_size(60).with_seed(42);
//! let scheduler = GeneticScheduler::from_spec(sample::small(), config)?;
//! match scheduler.solve().optimal() {
//!     Some(schedule) => print!("{}", scheduler.grid(schedule)),
//!     None => println!("no optimal timetable found"),
//! }
//! # Ok::<(), u_timetable::error::TimetableError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ga;
pub mod presenter;
pub mod random;
pub mod scheduler;
pub mod timetable;
