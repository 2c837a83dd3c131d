//! Month grid arithmetic for the calendar popup.
//!
//! Months are 0-based here (`0` is January), following chrono's `month0()`.

use std::fmt;

use chrono::{Datelike, NaiveDate};

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Number of days in the given month, or `0` if the month is outside the
/// range chrono can represent.
pub(crate) fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 >= 11 {
        (year.saturating_add(1), 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(0, |last| last.day())
}

/// Weekday of the first day of the month, `0` for Sunday through `6` for Saturday.
pub(crate) fn first_weekday(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}

/// The month currently shown in the popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ViewCursor {
    year: i32,
    month0: u32,
}

impl ViewCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0.min(11),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn next_month(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year.saturating_add(1),
                month0: 0,
            }
        } else {
            Self {
                month0: self.month0 + 1,
                ..self
            }
        }
    }

    pub fn prev_month(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year.saturating_sub(1),
                month0: 11,
            }
        } else {
            Self {
                month0: self.month0 - 1,
                ..self
            }
        }
    }

    /// Date of `day` within this month, if it exists.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// "Month Year" label used in the popup header.
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

impl From<NaiveDate> for ViewCursor {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GridCell {
    Blank,
    Day { day: u32, selected: bool },
}

/// Cells of one month, in row-major order over a 7-column grid.
#[derive(Clone, Debug)]
pub(crate) struct MonthGrid {
    cursor: ViewCursor,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn new(cursor: ViewCursor, selected: NaiveDate) -> Self {
        let leading = first_weekday(cursor.year(), cursor.month0());
        let days = days_in_month(cursor.year(), cursor.month0());

        let mut cells = vec![GridCell::Blank; leading as usize];
        cells.extend((1..=days).map(|day| GridCell::Day {
            day,
            selected: cursor.date_of(day) == Some(selected),
        }));

        Self { cursor, cells }
    }

    pub fn title(&self) -> String {
        self.cursor.title()
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len().div_ceil(7)
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        write!(f, "{}", WEEKDAY_NAMES.join(" "))?;
        for week in self.weeks() {
            let line = week
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => "  ".to_string(),
                    GridCell::Day { day, .. } => format!("{day:>2}"),
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "\n{}", line.trim_end())?;
        }
        Ok(())
    }
}
