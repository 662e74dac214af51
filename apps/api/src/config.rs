use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_data_path: String,
    /// Pins the date ongoing roles are measured up to. System date when unset.
    pub evaluation_date: Option<NaiveDate>,
    pub default_skill_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_data_path: std::env::var("RESUME_DATA_PATH")
                .unwrap_or_else(|_| "data/resume.json".to_string()),
            evaluation_date: optional_env("EVALUATION_DATE")
                .map(|v| {
                    NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                        .with_context(|| format!("EVALUATION_DATE '{v}' must be YYYY-MM-DD"))
                })
                .transpose()?,
            default_skill_limit: std::env::var("SKILLS_LIMIT")
                .unwrap_or_else(|_| "16".to_string())
                .parse::<usize>()
                .context("SKILLS_LIMIT must be a non-negative integer")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
