//! Calendar rules for the schedule widget.
//!
//! Dates are plain calendar days (`NaiveDate`). The picker, the endpoint and
//! the `data-tomorrow` attribute all exchange them as `YYYY-MM-DD`, so no
//! time zone conversion happens anywhere in the widget.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::WidgetError;

const ISO_DATE: &str = "%Y-%m-%d";

/// Weekday names, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, WidgetError> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE).map_err(|source| WidgetError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Today's date on the local calendar.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First and last day (inclusive) of the Sunday-to-Saturday week containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = today.week(chrono::Weekday::Sun);
    (week.first_day(), week.last_day())
}

/// Whether `date` falls in the same Sunday-to-Saturday week as `today`.
pub fn is_in_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    let (start, end) = week_bounds(today);
    (start..=end).contains(&date)
}

/// Weekday name of `date`.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// One-day move triggered by the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStep {
    Previous,
    Next,
}

impl DayStep {
    /// Apply the step to `date` on the calendar.
    pub fn apply(self, date: NaiveDate) -> Result<NaiveDate, WidgetError> {
        let stepped = match self {
            DayStep::Previous => date.checked_sub_days(Days::new(1)),
            DayStep::Next => date.checked_add_days(Days::new(1)),
        };
        stepped.ok_or(WidgetError::DateOutOfRange {
            from: date,
            step: self.as_str(),
        })
    }

    fn as_str(self) -> &'static str {
        match self {
            DayStep::Previous => "before",
            DayStep::Next => "after",
        }
    }
}
