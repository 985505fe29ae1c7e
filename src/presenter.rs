//! Human-readable day × time grid for a timetable.

use std::fmt;

use crate::catalog::Catalog;
use crate::timetable::{Assignment, Chromosome};

/// Label of an empty cell.
pub const FREE: &str = "free";

/// A rendered timetable: one row per day, one cell per time slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleGrid {
    days: Vec<String>,
    times: Vec<String>,
    /// `cells[day][time]`
    cells: Vec<Vec<String>>,
}

impl ScheduleGrid {
    /// Renders `schedule` against the catalog it was built from.
    ///
    /// Cells read `free` or `<course> (<teacher>, <room>)`.
    pub fn new(catalog: &Catalog, schedule: &Chromosome) -> Self {
        let times = catalog.time_slots().to_vec();
        let mut cells = vec![vec![FREE.to_string(); times.len()]; catalog.days().len()];

        for (slot, assignment) in schedule.iter(catalog) {
            if let Assignment::Session(s) = assignment {
                cells[slot.day][slot.time] = format!(
                    "{} ({}, {})",
                    catalog.courses()[s.course].name,
                    catalog.teachers()[s.teacher].name,
                    catalog.rooms()[s.room].name
                );
            }
        }

        Self {
            days: catalog.days().to_vec(),
            times,
            cells,
        }
    }

    /// Cell text at day and time indices.
    pub fn cell(&self, day: usize, time: usize) -> Option<&str> {
        self.cells.get(day)?.get(time).map(String::as_str)
    }

    /// `(day label, [(time label, cell)])` rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<(&str, &str)>)> + '_ {
        self.days.iter().zip(&self.cells).map(|(day, row)| {
            let cells = self
                .times
                .iter()
                .zip(row)
                .map(|(t, c)| (t.as_str(), c.as_str()))
                .collect();
            (day.as_str(), cells)
        })
    }
}

impl fmt::Display for ScheduleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, cells)) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{day}:")?;
            for (time, cell) in cells {
                writeln!(f, "  {time}: {cell}")?;
            }
        }
        Ok(())
    }
}
