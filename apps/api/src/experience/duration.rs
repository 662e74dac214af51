//! Per-record elapsed time.
//!
//! A plain calendar subtraction of `Jan 1` from `Mar 31` yields two months and
//! thirty days, which under-counts a January-to-March role by a month. Durations
//! here count both boundary months.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Signed calendar difference: whole years and months, then leftover days.
///
/// Month steps clamp to the end of the target month (Jan 31 + 1 month = Feb 28/29).
/// `years` and `months` share the sign of the overall difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

/// Returns `None` only if shifting `start` leaves the representable date range.
pub fn calendar_delta(start: NaiveDate, end: NaiveDate) -> Option<CalendarDelta> {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let mut anchor = shift_months(start, months)?;

    if end >= start {
        while anchor > end {
            months -= 1;
            anchor = shift_months(start, months)?;
        }
    } else {
        while anchor < end {
            months += 1;
            anchor = shift_months(start, months)?;
        }
    }

    Some(CalendarDelta {
        years: months / 12,
        months: months % 12,
        days: (end - anchor).num_days(),
    })
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let step = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

/// Inclusive duration of a work period, `0 <= months < 12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Elapsed {
    pub years: u32,
    pub months: u32,
}

impl Elapsed {
    /// Inclusive elapsed time from `start` to `end`. `None` when `end` precedes `start`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        let delta = calendar_delta(start, end)?;

        let mut years = delta.years;
        let mut months = delta.months;
        if delta.days >= 0 {
            months += 1;
        }
        if months >= 12 {
            months -= 12;
            years += 1;
        }

        Some(Self {
            years: u32::try_from(years).ok()?,
            months: u32::try_from(months).ok()?,
        })
    }

    pub fn from_total_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}
