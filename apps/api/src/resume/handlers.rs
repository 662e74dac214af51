use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::resume::{Contact, Education, Person, SpokenLanguage};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub full_name: String,
    #[serde(flatten)]
    pub person: Person,
    pub contacts: Vec<Contact>,
    pub edu: Vec<Education>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub experience_count: usize,
    pub evaluated_on: NaiveDate,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeResponse> {
    let profile = &state.profile;
    Json(ResumeResponse {
        full_name: profile.person.full_name(),
        person: profile.person.clone(),
        contacts: profile.contacts.clone(),
        edu: profile.edu.clone(),
        spoken_languages: profile.spoken_languages.clone(),
        experience_count: profile.experience.len(),
        evaluated_on: profile.evaluated_on,
    })
}
