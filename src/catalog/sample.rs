//! Built-in catalogs and default labels.
//!
//! [`small`] is a compact, readily solvable configuration used by the demo
//! driver and tests. [`curriculum`] is a first-year computing curriculum
//! over the full default week.

use super::{CatalogSpec, Course, Room, Teacher};

/// Default day labels.
pub const DEFAULT_DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Default time-slot labels: three morning and five afternoon periods.
pub const DEFAULT_TIME_SLOTS: &[&str] = &[
    "7:30-8:20",
    "9:20-10:10",
    "11:10-12:00",
    "12:00-12:50",
    "13:30-14:20",
    "15:20-16:10",
    "16:10-17:00",
    "17:10-18:00",
];

pub fn default_days() -> Vec<String> {
    DEFAULT_DAYS.iter().map(|d| d.to_string()).collect()
}

pub fn default_time_slots() -> Vec<String> {
    DEFAULT_TIME_SLOTS.iter().map(|t| t.to_string()).collect()
}

/// Three courses over a three-day, four-period week.
pub fn small() -> CatalogSpec {
    CatalogSpec::new(
        vec![
            Course::new("Programming 1", 3),
            Course::new("Discrete Mathematics", 2),
            Course::new("Logic for Computing", 2),
        ],
        vec![
            Teacher::new("Rodrigo Paes", ["Programming 1"]),
            Teacher::new("Rian Pinheiro", ["Discrete Mathematics", "Logic for Computing"]),
            Teacher::new("Fabio Costa", ["Logic for Computing"]),
        ],
        vec![Room::new("Room 1", 30), Room::new("Lab 1", 65)],
    )
    .with_days(["Monday", "Tuesday", "Wednesday"])
    .with_time_slots(["8:00-8:50", "9:00-9:50", "10:00-10:50", "11:00-11:50"])
}

/// First-year courses with workload-derived session counts.
///
/// Every teacher is additionally qualified for the first-period courses.
/// A full department catalog grants the first four periods this way; this
/// slice only holds first- and second-period courses, so the grant stops at
/// the first period and the second-period courses still need a listed
/// teacher.
pub fn curriculum() -> CatalogSpec {
    const FIRST_PERIOD: [&str; 5] = [
        "Programming 1",
        "Logic for Computing",
        "Computing, Society and Ethics",
        "Discrete Mathematics",
        "Differential and Integral Calculus",
    ];

    CatalogSpec::new(
        vec![
            Course::from_workload_hours("Programming 1", 72),
            Course::from_workload_hours("Logic for Computing", 72),
            Course::from_workload_hours("Computing, Society and Ethics", 72),
            Course::from_workload_hours("Discrete Mathematics", 72),
            Course::from_workload_hours("Differential and Integral Calculus", 144),
            Course::from_workload_hours("Data Structures", 72),
            Course::from_workload_hours("Databases", 72),
            Course::from_workload_hours("Computer Organization and Architecture", 72),
        ],
        vec![
            Teacher::new("Marcio Ribeiro", ["Data Structures"]),
            Teacher::new("Fabio Silva", ["Databases", "Distributed Systems"]),
            Teacher::new(
                "Erick Barboza",
                ["Computer Organization and Architecture", "Microcontrollers"],
            ),
            Teacher::new("Tiago Almeida", ["Differential and Integral Calculus"]),
            Teacher::new("Xu Yang", ["Differential and Integral Calculus", "Graph Theory"]),
            Teacher::new("Maria Escarpini", ["Databases", "Evolutionary Computing"]),
        ],
        vec![
            Room::new("Room 1", 30),
            Room::new("Room 2", 30),
            Room::new("Lab 1", 65),
            Room::new("Auditorium", 50),
        ],
    )
    .grant_to_all_teachers(FIRST_PERIOD)
}
