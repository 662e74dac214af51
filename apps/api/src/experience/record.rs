use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::experience::dates::{parse_date, resolve_end, Bound, EndDate};
use crate::experience::duration::Elapsed;
use crate::experience::error::ExperienceError;
use crate::experience::skills::Skill;

/// Descriptive fields of a role. Passed through untouched for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_contacts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_contacts_link: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A work period with parsed dates and its derived duration.
///
/// `end_date` is the effective end: the evaluation date when the role is ongoing.
/// Construction enforces `start_date <= end_date`; the record is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceRecord {
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_ongoing: bool,
    #[serde(rename = "duration")]
    elapsed: Elapsed,
    #[serde(flatten)]
    pub details: ExperienceDetails,
}

impl ExperienceRecord {
    /// Builds a record from raw date strings.
    ///
    /// `label` identifies the record in error messages. `today` stands in for a
    /// missing or unparseable end date.
    pub fn build(
        label: &str,
        start: Option<&str>,
        end: Option<&str>,
        details: ExperienceDetails,
        today: NaiveDate,
    ) -> Result<Self, ExperienceError> {
        let start_raw = start
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ExperienceError::MissingStartDate {
                record: label.to_string(),
            })?;

        let start_date =
            parse_date(start_raw, Bound::Start).ok_or_else(|| ExperienceError::UnparseableDate {
                record: label.to_string(),
                value: start_raw.to_string(),
            })?;

        let (end_date, is_ongoing) = match resolve_end(end) {
            EndDate::Closed(date) => (date, false),
            EndDate::Ongoing => (today, true),
        };

        let elapsed =
            Elapsed::between(start_date, end_date).ok_or_else(|| ExperienceError::EndBeforeStart {
                record: label.to_string(),
                start: start_date,
                end: end_date,
            })?;

        Ok(Self {
            start_date,
            end_date,
            is_ongoing,
            elapsed,
            details,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_ongoing(&self) -> bool {
        self.is_ongoing
    }

    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    pub fn duration_months(&self) -> u32 {
        self.elapsed.total_months()
    }
}

/// Human-readable record identifier for error messages.
pub fn record_label(index: usize, company_name: &str) -> String {
    if company_name.trim().is_empty() {
        format!("experience[{index}]")
    } else {
        format!("experience[{index}] ({})", company_name.trim())
    }
}
