use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// A calendar date rendered day first: `5/3/2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDate(pub NaiveDate);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.0.day(), self.0.month(), self.0.year())
    }
}

impl From<NaiveDate> for DisplayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Format a date as day/month/year without zero padding.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    DisplayDate(date).to_string()
}

/// Today's date according to the local clock.
#[must_use]
pub fn today() -> DisplayDate {
    DisplayDate(Local::now().date_naive())
}
