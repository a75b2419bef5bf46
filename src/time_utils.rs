use chrono::{Datelike, NaiveDate};

/// Label for a time-axis tick, coarsest unit the date sits on:
///
/// - 1 January -> `YYYY`
/// - first of a month -> full month name
/// - any other day -> `Mon DD`
pub fn format_time_tick(date: NaiveDate) -> String {
    if date.ordinal() == 1 {
        date.format("%Y").to_string()
    } else if date.day() == 1 {
        date.format("%B").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}
