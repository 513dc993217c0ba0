//! Birth date reconstruction from a `day/month/...` cell and a known age.
//!
//! Input files only carry a trustworthy day and month; the year cell is a
//! placeholder. The birth year is inferred from the age relative to `today`,
//! one year earlier when this year's birthday is still ahead.

use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDate(pub String);

impl std::fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid birth date: {}", self.0)
    }
}

/// The estimated year is written back as `dd/mm/yyyy`, so it must have four digits.
const FOUR_DIGIT_YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

pub fn correct_birth_date(raw: &str, age: i32, today: NaiveDate) -> Result<NaiveDate, InvalidDate> {
    let invalid = || InvalidDate(raw.to_string());

    let (day, month) = parse_day_month(raw).ok_or_else(invalid)?;
    let estimated_year = today
        .year()
        .checked_sub(age)
        .filter(|year| FOUR_DIGIT_YEARS.contains(year))
        .ok_or_else(invalid)?;

    // Strict: 29/2 on a non-leap estimated year is rejected, not clamped.
    let candidate = NaiveDate::from_ymd_opt(estimated_year, month, day).ok_or_else(invalid)?;

    if this_year_occurrence(day, month, today.year()) > today {
        // minus one year keeps the month and clamps 29/2 to 28/2
        return candidate
            .checked_sub_months(Months::new(12))
            .ok_or_else(invalid);
    }

    Ok(candidate)
}

/// Day and month from the first two `/` components; a third `/` separated
/// component must exist but its value is ignored.
fn parse_day_month(raw: &str) -> Option<(u32, u32)> {
    let mut parts = raw.trim().splitn(3, '/');
    let day = parse_component(parts.next()?)?;
    let month = parse_component(parts.next()?)?;
    parts.next()?;
    Some((day, month))
}

fn parse_component(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn this_year_occurrence(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        // 29/2 in a non-leap year: the birthday is reached on 1/3
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}
