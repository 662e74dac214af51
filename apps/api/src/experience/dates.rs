//! Date parsing for human-entered work periods.
//!
//! Two input shapes are accepted: `DD-MM-YYYY` and `MM-YYYY`. Month-only input
//! carries no day, so the day is picked from the bound being parsed: the first
//! day of the month for a start, the last day for an end. That keeps whole-month
//! periods inclusive when durations are computed from them.

use chrono::{Datelike, Months, NaiveDate};

/// Which side of a period a date string describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Resolved end of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDate {
    Closed(NaiveDate),
    /// No usable end date was given; the period runs until the evaluation date.
    Ongoing,
}

/// Parses `DD-MM-YYYY` or `MM-YYYY`. Returns `None` for anything else.
pub fn parse_date(input: &str, bound: Bound) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if !input
        .split('-')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%d-%m-%Y") {
        return Some(date);
    }

    let (month, year) = input.split_once('-')?;
    if month.len() > 2 || year.len() != 4 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    match bound {
        Bound::Start => first_day_of_month(year, month),
        Bound::End => last_day_of_month(year, month),
    }
}

/// Absent, blank and unparseable end dates all mean the period is still running.
pub fn resolve_end(input: Option<&str>) -> EndDate {
    match input.and_then(|s| parse_date(s, Bound::End)) {
        Some(date) => EndDate::Closed(date),
        None => EndDate::Ongoing,
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    first_day_of_month(year, month)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// A calendar month, the unit the aggregate totals are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Months from `self` to `last`, both included. Zero when `last` precedes `self`.
    pub fn months_through(self, last: YearMonth) -> u32 {
        let span = (last.year - self.year) * 12 + last.month as i32 - self.month as i32 + 1;
        u32::try_from(span).unwrap_or(0)
    }

    /// Months touched by a period, stepping whole months from `start` while the
    /// step stays on or before `end`.
    ///
    /// Steps keep the start's day of month (clamped), so an end day earlier in the
    /// month than the start day leaves the end month out. The count always equals
    /// the inclusive duration of the period. Empty when `end` precedes `start`.
    pub fn covered_by(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = YearMonth> {
        (0u32..)
            .map_while(move |k| start.checked_add_months(Months::new(k)))
            .take_while(move |step| *step <= end)
            .map(YearMonth::of)
    }
}
