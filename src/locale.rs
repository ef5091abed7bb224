//! Fixed French date formatting for letter date lines.

use chrono::{Datelike, Local, NaiveDate};

/// Location written before the date when none is given.
pub const DEFAULT_LOCATION: &str = "Saint-Maur-des-Fossés";

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// French month name, lowercase.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Format a date the French way: `17 octobre 2026`.
///
/// The day is written without padding, `1 février 2024` included.
pub fn french_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date), date.year())
}

/// Letter date line: `Saint-Maur-des-Fossés, le 17 octobre 2026`.
pub fn date_line(location: &str, date: NaiveDate) -> String {
    format!("{}, le {}", location, french_date(date))
}

/// Date line for today in the local time zone.
pub fn today_line(location: &str) -> String {
    date_line(location, Local::now().date_naive())
}
