use chrono::NaiveDate;

use crate::experience::aggregate::ExperienceSet;
use crate::experience::error::ExperienceError;
use crate::experience::record::{record_label, ExperienceRecord};
use crate::models::resume::{Contact, Education, Person, RawResume, SpokenLanguage};

/// A loaded resume. Experience dates are parsed and validated; everything else
/// is kept as entered.
#[derive(Debug, Clone)]
pub struct ResumeProfile {
    pub person: Person,
    pub contacts: Vec<Contact>,
    pub edu: Vec<Education>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub experience: ExperienceSet,
    /// Date ongoing roles were measured up to.
    pub evaluated_on: NaiveDate,
}

impl ResumeProfile {
    /// Fails on the first invalid experience entry rather than leaving it out of the totals.
    pub fn build(raw: RawResume, today: NaiveDate) -> Result<Self, ExperienceError> {
        let records = raw
            .exp
            .into_iter()
            .enumerate()
            .map(|(index, exp)| {
                let label = record_label(index, &exp.details.company_name);
                ExperienceRecord::build(
                    &label,
                    exp.work_start_date.as_deref(),
                    exp.work_end_date.as_deref(),
                    exp.details,
                    today,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            person: raw.person,
            contacts: raw.contacts,
            edu: raw.edu,
            spoken_languages: raw.spoken_languages,
            experience: ExperienceSet::new(records),
            evaluated_on: today,
        })
    }
}
