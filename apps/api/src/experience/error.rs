use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the experience duration engine.
///
/// Record-level variants name the offending record so a bad entry in the resume
/// data can be found without guessing. A record is never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperienceError {
    #[error("{record}: start date is missing")]
    MissingStartDate { record: String },

    #[error("{record}: cannot parse start date '{value}' (expected DD-MM-YYYY or MM-YYYY)")]
    UnparseableDate { record: String, value: String },

    #[error("{record}: period ends on {end} before it starts on {start}")]
    EndBeforeStart {
        record: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("career span requires at least one experience record")]
    EmptyRecordSet,
}
