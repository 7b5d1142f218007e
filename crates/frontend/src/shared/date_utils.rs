//! Utilities for date formatting
//!
//! Dates come from the API as UTC timestamps and are shown as US short dates.

use chrono::{DateTime, Datelike, Utc};
use contracts::domain::a001_random_user::DatedAge;

/// Format a timestamp as M/D/YYYY
/// Example: 1992-03-08T15:13:16.688Z -> "3/8/1992"
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Date followed by age, e.g. "3/8/1992 (Age: 30)"
pub fn format_dated_age(value: &DatedAge) -> String {
    format!("{} (Age: {})", format_date(&value.date), value.age)
}
