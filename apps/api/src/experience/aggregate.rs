//! Experience totals over a whole resume.
//!
//! Two figures are produced:
//! - compact: distinct calendar months covered by at least one record. Concurrent
//!   roles share months, so overlap is never counted twice. A record covers as
//!   many months as its own duration.
//! - wide: every month from the earliest covered month to the latest. Gaps between
//!   roles are included, which makes it a career-span figure rather than time worked.
//!
//! Both are recomputed from the record set on each call. The set is immutable,
//! so repeated calls agree.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::experience::dates::YearMonth;
use crate::experience::duration::Elapsed;
use crate::experience::error::ExperienceError;
use crate::experience::record::ExperienceRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceSet {
    records: Vec<ExperienceRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceTotals {
    pub compact_total_months: u32,
    pub compact_total: Elapsed,
    /// `None` for an empty set, where a span has no endpoints.
    pub wide_total_months: Option<u32>,
}

impl ExperienceSet {
    pub fn new(records: Vec<ExperienceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExperienceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ongoing_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_ongoing()).count()
    }

    /// Union of the months covered by every record.
    pub fn covered_months(&self) -> BTreeSet<YearMonth> {
        self.records
            .iter()
            .flat_map(|r| YearMonth::covered_by(r.start_date(), r.end_date()))
            .collect()
    }

    pub fn compact_total_months(&self) -> u32 {
        self.covered_months().len() as u32
    }

    /// Months from the earliest covered month to the latest, inclusive.
    ///
    /// Gaps between records count. Bounds come from the covered months so that a
    /// single record spans exactly its own duration.
    pub fn wide_total_months(&self) -> Result<u32, ExperienceError> {
        let covered = self.covered_months();
        let first = covered.first().ok_or(ExperienceError::EmptyRecordSet)?;
        let last = covered.last().ok_or(ExperienceError::EmptyRecordSet)?;

        Ok(first.months_through(*last))
    }

    pub fn totals(&self) -> ExperienceTotals {
        let compact_total_months = self.compact_total_months();
        ExperienceTotals {
            compact_total_months,
            compact_total: Elapsed::from_total_months(compact_total_months),
            wide_total_months: self.wide_total_months().ok(),
        }
    }

    /// Records by effective end date, latest first. Ongoing roles lead; ties keep
    /// input order.
    pub fn ordered(&self) -> Vec<&ExperienceRecord> {
        let mut ordered: Vec<&ExperienceRecord> = self.records.iter().collect();
        ordered.sort_by_key(|r| Reverse((r.is_ongoing(), r.end_date())));
        ordered
    }

    /// Positions into `records()` in presentation order.
    pub fn ordered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.records.len()).collect();
        indices.sort_by_key(|&i| {
            let r = &self.records[i];
            Reverse((r.is_ongoing(), r.end_date()))
        });
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{period, today};

    fn set(periods: &[(&str, Option<&str>)]) -> ExperienceSet {
        ExperienceSet::new(periods.iter().map(|(s, e)| period(s, *e)).collect())
    }

    #[test]
    fn test_empty_set() {
        let s = ExperienceSet::default();
        assert_eq!(s.compact_total_months(), 0);
        assert_eq!(s.wide_total_months(), Err(ExperienceError::EmptyRecordSet));
        let totals = s.totals();
        assert_eq!(totals.compact_total_months, 0);
        assert_eq!(totals.wide_total_months, None);
    }

    #[test]
    fn test_single_record_totals_match_duration() {
        let s = set(&[("03-2019", Some("08-2021"))]);
        let duration = s.records()[0].duration_months();
        assert_eq!(duration, 30);
        assert_eq!(s.compact_total_months(), duration);
        assert_eq!(s.wide_total_months(), Ok(duration));
    }

    #[test]
    fn test_single_ongoing_record_totals_match_duration() {
        let s = set(&[("06-2021", None)]);
        let duration = s.records()[0].duration_months();
        assert_eq!(s.compact_total_months(), duration);
        assert_eq!(s.wide_total_months(), Ok(duration));
    }

    #[test]
    fn test_full_dates_with_earlier_end_day_match_duration() {
        let s = set(&[("20-01-2020", Some("10-03-2020"))]);
        let duration = s.records()[0].duration_months();
        assert_eq!(duration, 2);
        assert_eq!(s.compact_total_months(), duration);
        assert_eq!(s.wide_total_months(), Ok(duration));
    }

    #[test]
    fn test_ongoing_full_start_date_matches_duration() {
        // today is 2026-10-19, before the 25th
        let s = set(&[("25-06-2021", None)]);
        let duration = s.records()[0].duration_months();
        assert_eq!(duration, 64);
        assert_eq!(s.compact_total_months(), duration);
        assert_eq!(s.wide_total_months(), Ok(duration));
    }

    #[test]
    fn test_identical_full_date_records_deduplicate() {
        let s = set(&[
            ("20-01-2020", Some("10-03-2020")),
            ("20-01-2020", Some("10-03-2020")),
        ]);
        assert_eq!(s.compact_total_months(), s.records()[0].duration_months());
    }

    #[test]
    fn test_identical_records_deduplicate() {
        let s = set(&[("01-2020", Some("06-2020")), ("01-2020", Some("06-2020"))]);
        assert_eq!(s.compact_total_months(), 6);
        assert_eq!(s.compact_total_months(), s.records()[0].duration_months());
    }

    #[test]
    fn test_overlapping_records_count_once() {
        let s = set(&[("01-2020", Some("12-2020")), ("06-2020", Some("06-2021"))]);
        assert_eq!(s.compact_total_months(), 18);
        assert_eq!(s.wide_total_months(), Ok(18));
    }

    #[test]
    fn test_gap_counted_only_in_wide() {
        let s = set(&[("01-2021", Some("03-2021")), ("05-2021", Some("06-2021"))]);
        assert_eq!(s.compact_total_months(), 5);
        assert_eq!(s.wide_total_months(), Ok(6));
    }

    #[test]
    fn test_adjacent_records_have_no_gap() {
        let s = set(&[("01-2021", Some("03-2021")), ("04-2021", Some("06-2021"))]);
        assert_eq!(s.compact_total_months(), 6);
        assert_eq!(s.wide_total_months(), Ok(6));
    }

    #[test]
    fn test_compact_never_exceeds_wide() {
        let cases: Vec<Vec<(&str, Option<&str>)>> = vec![
            vec![("01-2015", Some("12-2016")), ("06-2018", None)],
            vec![("10-2022", Some("11-2025")), ("01-2023", Some("05-2023"))],
            vec![
                ("01-2010", Some("01-2010")),
                ("12-2012", Some("02-2013")),
                ("03-2013", Some("03-2014")),
            ],
            vec![
                ("20-01-2020", Some("10-03-2020")),
                ("05-03-2020", Some("06-03-2020")),
            ],
            vec![("25-06-2021", None), ("15-01-2019", Some("10-02-2019"))],
        ];
        for case in cases {
            let s = set(&case);
            assert!(s.compact_total_months() <= s.wide_total_months().unwrap());
        }
    }

    #[test]
    fn test_totals_split_years_and_months() {
        let s = set(&[("01-2020", Some("12-2020")), ("06-2020", Some("06-2021"))]);
        let totals = s.totals();
        assert_eq!(totals.compact_total, Elapsed { years: 1, months: 6 });
        assert_eq!(totals.wide_total_months, Some(18));
    }

    #[test]
    fn test_recomputation_is_stable() {
        let s = set(&[("01-2019", Some("12-2019")), ("06-2020", None)]);
        assert_eq!(s.compact_total_months(), s.compact_total_months());
        assert_eq!(s.wide_total_months(), s.wide_total_months());
    }

    #[test]
    fn test_ordering_puts_ongoing_first_then_latest_end() {
        let s = set(&[
            ("01-2015", Some("12-2016")),
            ("01-2019", Some("12-2020")),
            ("06-2021", None),
            ("01-2017", Some("12-2018")),
        ]);
        let ends: Vec<_> = s.ordered().iter().map(|r| r.end_date()).collect();
        assert_eq!(ends[0], today());
        assert!(ends.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(s.ordered_indices(), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_ordering_keeps_input_order_on_ties() {
        let s = set(&[("01-2019", None), ("01-2020", None)]);
        assert_eq!(s.ordered_indices(), vec![0, 1]);
    }

    #[test]
    fn test_ongoing_count() {
        let s = set(&[("01-2019", None), ("01-2018", Some("01-2019"))]);
        assert_eq!(s.ongoing_count(), 1);
        assert_eq!(s.len(), 2);
    }
}
