//! Axum route handlers for the Experience API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::experience::aggregate::{ExperienceSet, ExperienceTotals};
use crate::experience::labels::{decimal_years, elapsed_label, headline_years, period_label};
use crate::experience::record::{record_label, ExperienceDetails, ExperienceRecord};
use crate::experience::skills::{distinct_skills, skill_frequency, Skill, SkillCount};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: ExperienceRecord,
    pub duration_months: u32,
    pub period_label: String,
    pub duration_label: String,
}

impl RecordView {
    fn from_record(record: &ExperienceRecord) -> Self {
        Self {
            duration_months: record.duration_months(),
            period_label: period_label(record),
            duration_label: elapsed_label(record.elapsed()),
            record: record.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExperienceSummaryResponse {
    pub evaluated_on: NaiveDate,
    #[serde(flatten)]
    pub totals: ExperienceTotals,
    /// Built from the compact total.
    pub headline: Option<String>,
    /// Built from the wide total.
    pub career_span_years: Option<String>,
    pub records: Vec<RecordView>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub most_common: Vec<SkillCount>,
    pub all: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodInput {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateRequest {
    pub records: Vec<PeriodInput>,
}

#[derive(Debug, Serialize)]
pub struct AggregatedRecord {
    /// Position of this record in the request.
    pub index: usize,
    #[serde(flatten)]
    pub record: ExperienceRecord,
}

#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub evaluated_on: NaiveDate,
    pub compact_total_months: u32,
    pub wide_total_months: u32,
    pub records: Vec<AggregatedRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/experience
///
/// Totals and the presentation-ordered records of the loaded resume.
pub async fn handle_get_experience(
    State(state): State<AppState>,
) -> Json<ExperienceSummaryResponse> {
    let profile = &state.profile;
    let totals = profile.experience.totals();

    Json(ExperienceSummaryResponse {
        evaluated_on: profile.evaluated_on,
        headline: headline_years(totals.compact_total_months),
        career_span_years: totals.wide_total_months.map(decimal_years),
        records: profile
            .experience
            .ordered()
            .into_iter()
            .map(RecordView::from_record)
            .collect(),
        totals,
    })
}

/// GET /api/v1/experience/skills?limit=N
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Json<SkillsResponse> {
    let records = state.profile.experience.records();
    let limit = query.limit.unwrap_or(state.config.default_skill_limit);

    Json(SkillsResponse {
        most_common: skill_frequency(records, limit),
        all: distinct_skills(records),
    })
}

/// POST /api/v1/experience/aggregate
///
/// Evaluates ad-hoc periods against the server clock. Any invalid record fails
/// the whole request.
pub async fn handle_aggregate(
    State(state): State<AppState>,
    Json(request): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, AppError> {
    if request.records.is_empty() {
        return Err(AppError::Validation(
            "records must contain at least one period".to_string(),
        ));
    }

    let today = state.clock.today();
    let records = request
        .records
        .iter()
        .enumerate()
        .map(|(index, input)| {
            ExperienceRecord::build(
                &record_label(index, ""),
                input.start_date.as_deref(),
                input.end_date.as_deref(),
                ExperienceDetails::default(),
                today,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let set = ExperienceSet::new(records);

    let compact_total_months = set.compact_total_months();
    let wide_total_months = set.wide_total_months()?;
    let records = set
        .ordered_indices()
        .into_iter()
        .map(|index| AggregatedRecord {
            index,
            record: set.records()[index].clone(),
        })
        .collect();

    Ok(Json(AggregateResponse {
        evaluated_on: today,
        compact_total_months,
        wide_total_months,
        records,
    }))
}
