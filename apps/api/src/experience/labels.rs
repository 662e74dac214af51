//! Display strings for durations and periods.

use crate::experience::duration::Elapsed;
use crate::experience::record::ExperienceRecord;

/// `"1 yr 3 mo"`, `"2 yr"`, `"3 mo"`. A zero duration renders as `"0 mo"`.
pub fn elapsed_label(elapsed: Elapsed) -> String {
    let mut parts = Vec::with_capacity(2);
    if elapsed.years > 0 {
        parts.push(format!("{} yr", elapsed.years));
    }
    if elapsed.months > 0 || elapsed.years == 0 {
        parts.push(format!("{} mo", elapsed.months));
    }
    parts.join(" ")
}

/// `"Jan 2020 - Mar 2021"`, or `"Jan 2020 - Present"` for an ongoing role.
pub fn period_label(record: &ExperienceRecord) -> String {
    let start = record.start_date().format("%b %Y");
    if record.is_ongoing() {
        format!("{start} - Present")
    } else {
        format!("{start} - {}", record.end_date().format("%b %Y"))
    }
}

/// `"5+ years experience"`; `None` below one full year.
pub fn headline_years(total_months: u32) -> Option<String> {
    let years = total_months / 12;
    (years > 0).then(|| format!("{years}+ years experience"))
}

/// Years with one decimal, e.g. `"5.4"` for 65 months.
pub fn decimal_years(total_months: u32) -> String {
    format!("{:.1}", f64::from(total_months) / 12.0)
}
