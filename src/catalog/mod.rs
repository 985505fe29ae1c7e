//! Domain catalog: the immutable courses, teachers, rooms and slot universe.
//!
//! A [`CatalogSpec`] is the plain input form (and, with the `serde` feature,
//! the on-disk form). [`Catalog::new`] validates it and compiles the
//! structures the GA works against:
//!
//! - the slot universe, enumerated once in day-major order
//!   (`index = day * time_slots + time`)
//! - a teacher × course qualification matrix, so the qualification
//!   pre-filter and mismatch penalty never hash strings
//!
//! # Submodules
//!
//! - [`sample`]: Built-in catalogs and the default day / time-slot labels

pub mod sample;
mod types;

use std::collections::HashSet;

use crate::error::CatalogError;

pub use sample::{DEFAULT_DAYS, DEFAULT_TIME_SLOTS};
pub use types::{Course, Room, Slot, Teacher, HOURS_PER_WEEKLY_SESSION};

/// Unvalidated catalog input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSpec {
    pub courses: Vec<Course>,
    pub teachers: Vec<Teacher>,
    pub rooms: Vec<Room>,
    /// Day labels; defaults to Monday–Friday.
    #[cfg_attr(feature = "serde", serde(default = "sample::default_days"))]
    pub days: Vec<String>,
    /// Time-slot labels; defaults to the eight reference periods.
    #[cfg_attr(feature = "serde", serde(default = "sample::default_time_slots"))]
    pub time_slots: Vec<String>,
}

impl CatalogSpec {
    /// Creates a spec over the default days and time slots.
    pub fn new(courses: Vec<Course>, teachers: Vec<Teacher>, rooms: Vec<Room>) -> Self {
        Self {
            courses,
            teachers,
            rooms,
            days: sample::default_days(),
            time_slots: sample::default_time_slots(),
        }
    }

    /// Replaces the day labels.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the time-slot labels.
    pub fn with_time_slots<I, S>(mut self, time_slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.time_slots = time_slots.into_iter().map(Into::into).collect();
        self
    }

    /// Adds the given course names to every teacher's qualifications.
    pub fn grant_to_all_teachers<'a, I>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let courses: Vec<&str> = courses.into_iter().collect();
        for teacher in &mut self.teachers {
            teacher
                .courses_can_teach
                .extend(courses.iter().map(|c| c.to_string()));
        }
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self)
    }
}

/// Validated, indexed catalog.
///
/// Never mutated by the engine; chromosomes reference its entries by index.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    teachers: Vec<Teacher>,
    rooms: Vec<Room>,
    days: Vec<String>,
    time_slots: Vec<String>,
    slots: Vec<Slot>,
    /// `qualified[teacher * courses.len() + course]`
    qualified: Vec<bool>,
}

impl Catalog {
    /// Validates `spec` and builds the slot universe.
    ///
    /// Fails on any empty list, duplicate course / teacher / room name, or a
    /// course with zero weekly sessions.
    pub fn new(spec: CatalogSpec) -> Result<Self, CatalogError> {
        let CatalogSpec {
            courses,
            teachers,
            rooms,
            days,
            time_slots,
        } = spec;

        if courses.is_empty() {
            return Err(CatalogError::NoCourses);
        }
        if teachers.is_empty() {
            return Err(CatalogError::NoTeachers);
        }
        if rooms.is_empty() {
            return Err(CatalogError::NoRooms);
        }
        if days.is_empty() {
            return Err(CatalogError::NoDays);
        }
        if time_slots.is_empty() {
            return Err(CatalogError::NoTimeSlots);
        }

        if let Some(name) = first_duplicate(courses.iter().map(|c| c.name.as_str())) {
            return Err(CatalogError::DuplicateCourse(name));
        }
        if let Some(name) = first_duplicate(teachers.iter().map(|t| t.name.as_str())) {
            return Err(CatalogError::DuplicateTeacher(name));
        }
        if let Some(name) = first_duplicate(rooms.iter().map(|r| r.name.as_str())) {
            return Err(CatalogError::DuplicateRoom(name));
        }
        if let Some(course) = courses.iter().find(|c| c.sessions_per_week == 0) {
            return Err(CatalogError::ZeroSessions(course.name.clone()));
        }

        let slots = (0..days.len())
            .flat_map(|day| (0..time_slots.len()).map(move |time| Slot::new(day, time)))
            .collect();

        let qualified = teachers
            .iter()
            .flat_map(|t| courses.iter().map(move |c| t.can_teach(&c.name)))
            .collect();

        Ok(Self {
            courses,
            teachers,
            rooms,
            days,
            time_slots,
            slots,
            qualified,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    /// The slot universe in canonical order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Size of the slot universe (`days × time_slots`).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Canonical index of `slot`, or `None` if it lies outside the universe.
    pub fn slot_index(&self, slot: Slot) -> Option<usize> {
        (slot.day < self.days.len() && slot.time < self.time_slots.len())
            .then(|| slot.day * self.time_slots.len() + slot.time)
    }

    /// Number of (course, teacher, room) triples.
    pub fn triple_count(&self) -> usize {
        self.courses.len() * self.teachers.len() * self.rooms.len()
    }

    /// Whether `teacher` may teach `course` (both catalog indices).
    pub fn is_qualified(&self, teacher: usize, course: usize) -> bool {
        self.qualified[teacher * self.courses.len() + course]
    }

    /// Sum of weekly session targets over all courses.
    pub fn total_sessions(&self) -> u64 {
        self.courses.iter().map(|c| c.sessions_per_week as u64).sum()
    }
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    names
        .find(|name| !seen.insert(*name))
        .map(str::to_string)
}
