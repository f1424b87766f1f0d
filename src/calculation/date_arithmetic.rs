//! Calendar primitives.
//!
//! Day counts, month addition, year lengths and year boundaries, plus
//! parsing of the onboarding date supplied at the API boundary.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Accepted input format for onboarding dates.
pub const ONBOARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an onboarding date in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_onboard_date;
/// use chrono::NaiveDate;
///
/// let date = parse_onboard_date("2024-04-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// assert!(parse_onboard_date("2023-02-29").is_err());
/// ```
pub fn parse_onboard_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ONBOARD_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            input: input.to_string(),
            message: e.to_string(),
        }
    })
}

/// Whole days from `earlier` to `later`; negative when `later` comes first.
pub fn day_count(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Adds calendar months, clamping to the last day of a shorter month
/// (Aug 31 + 6 months is the last day of February).
pub fn add_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::DateOutOfRange {
            message: format!("{} + {} months", date, months),
        })
}

/// 366 for Gregorian leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    if leap { 366 } else { 365 }
}

/// The calendar year of a date.
pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}

/// January 1st of `year`.
pub fn start_of_year(year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| EngineError::DateOutOfRange {
        message: format!("January 1st of year {}", year),
    })
}

/// December 31st of `year`.
pub fn end_of_year(year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| EngineError::DateOutOfRange {
        message: format!("December 31st of year {}", year),
    })
}
