//! Catalog entities: courses, teachers, rooms and slots.

use std::collections::HashSet;

/// Hours of course workload that correspond to one weekly session.
///
/// A 72-hour course meets 4 times a week, a 144-hour course 8 times.
pub const HOURS_PER_WEEKLY_SESSION: u32 = 18;

/// A course with its weekly session target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    /// Unique name.
    pub name: String,
    /// Number of sessions that should be scheduled per week.
    pub sessions_per_week: u32,
}

impl Course {
    pub fn new(name: impl Into<String>, sessions_per_week: u32) -> Self {
        Self {
            name: name.into(),
            sessions_per_week,
        }
    }

    /// Creates a course from its total workload in hours.
    ///
    /// Rounds down to whole sessions, with a floor of one session.
    ///
    /// ```
    /// use u_timetable::catalog::Course;
    ///
    /// assert_eq!(Course::from_workload_hours("Calculus", 144).sessions_per_week, 8);
    /// assert_eq!(Course::from_workload_hours("Capstone", 288).sessions_per_week, 16);
    /// ```
    pub fn from_workload_hours(name: impl Into<String>, hours: u32) -> Self {
        Self::new(name, (hours / HOURS_PER_WEEKLY_SESSION).max(1))
    }
}

/// A teacher and the set of course names they are qualified to teach.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teacher {
    /// Unique name.
    pub name: String,
    /// Course names this teacher can teach. Names absent from the catalog
    /// are allowed and simply never match.
    pub courses_can_teach: HashSet<String>,
}

impl Teacher {
    pub fn new<I, S>(name: impl Into<String>, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            courses_can_teach: courses.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this teacher is qualified for the named course.
    pub fn can_teach(&self, course: &str) -> bool {
        self.courses_can_teach.contains(course)
    }
}

/// A room. Capacity is carried for reporting and is not scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Unique name.
    pub name: String,
    pub capacity: u32,
}

impl Room {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// One (day, time) cell of the weekly grid.
///
/// Both fields index into the catalog's day and time-slot label lists.
/// Two slots with the same indices are the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub day: usize,
    pub time: usize,
}

impl Slot {
    pub fn new(day: usize, time: usize) -> Self {
        Self { day, time }
    }
}
