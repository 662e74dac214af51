//! Fixtures shared by unit tests.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::clock::FixedClock;
use crate::config::Config;
use crate::experience::record::{ExperienceDetails, ExperienceRecord};
use crate::experience::skills::Skill;
use crate::models::resume::RawResume;
use crate::resume::profile::ResumeProfile;
use crate::resume::source::ResumeSource;
use crate::state::AppState;

pub const SAMPLE_RESUME_JSON: &str = r#"{
    "first_name": "Jane",
    "last_name": "Doe",
    "email": "jane@example.com",
    "website": "https://jane.example.com",
    "expected_position": "Senior Backend Engineer",
    "contacts": [
        {"name": "github", "link": "https://github.com/janedoe", "text": "github: janedoe"}
    ],
    "exp": [
        {
            "company_name": "Acme",
            "position_name": "Lead Engineer",
            "work_start_date": "10-2022",
            "work_end_date": null,
            "skills": ["Rust", "Postgres", {"name": "Docker", "category": "devops"}]
        },
        {
            "company_name": "Globex",
            "position_name": "Backend Engineer",
            "work_start_date": "01-2020",
            "work_end_date": "12-2020",
            "skills": ["Python", "docker"]
        },
        {
            "company_name": "Initech",
            "position_name": "Contractor",
            "work_start_date": "06-2020",
            "work_end_date": "06-2021",
            "location": "Remote",
            "skills": ["python", "Redis"]
        }
    ],
    "edu": [
        {
            "degree": "MSc",
            "university": "State University",
            "programme": "Computer Science",
            "year_start": 2012,
            "year_end": 2014,
            "website": "https://uni.example.com",
            "icon": null
        }
    ],
    "spoken_languages": [{"name": "English", "level": "C2"}]
}"#;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn raw_resume() -> RawResume {
    serde_json::from_str(SAMPLE_RESUME_JSON).unwrap()
}

pub fn period(start: &str, end: Option<&str>) -> ExperienceRecord {
    ExperienceRecord::build(
        "fixture",
        Some(start),
        end,
        ExperienceDetails::default(),
        today(),
    )
    .unwrap()
}

pub fn record_with_skills(skills: &[&str]) -> ExperienceRecord {
    let details = ExperienceDetails {
        skills: skills.iter().map(|s| Skill::Name(s.to_string())).collect(),
        ..Default::default()
    };
    ExperienceRecord::build("fixture", Some("01-2020"), None, details, today()).unwrap()
}

pub struct StaticSource(pub RawResume);

impl StaticSource {
    pub fn sample() -> Self {
        Self(raw_resume())
    }
}

#[async_trait]
impl ResumeSource for StaticSource {
    async fn load(&self) -> Result<RawResume> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static fixture".to_string()
    }
}

pub fn test_state() -> AppState {
    AppState {
        config: Config {
            port: 0,
            rust_log: "info".to_string(),
            resume_data_path: String::new(),
            evaluation_date: Some(today()),
            default_skill_limit: 16,
        },
        profile: Arc::new(ResumeProfile::build(raw_resume(), today()).unwrap()),
        clock: Arc::new(FixedClock(today())),
    }
}
