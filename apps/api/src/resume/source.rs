//! Where resume data comes from.
//!
//! `AppState` never sees a source; the profile is loaded once at startup and
//! shared read-only afterwards.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::models::resume::RawResume;
use crate::resume::profile::ResumeProfile;

#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn load(&self) -> Result<RawResume>;

    /// Short description for logs and error context.
    fn describe(&self) -> String;
}

/// Reads the resume from a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResumeSource for JsonFileSource {
    async fn load(&self) -> Result<RawResume> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read resume data from {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Resume data in {} is not valid", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Loads raw data from `source` and builds the profile, measuring ongoing roles up to `clock.today()`.
pub async fn load_profile(source: &dyn ResumeSource, clock: &dyn Clock) -> Result<ResumeProfile> {
    let raw = source.load().await?;
    let today = clock.today();
    let profile = ResumeProfile::build(raw, today)
        .with_context(|| format!("Invalid experience data in {}", source.describe()))?;

    info!(
        "Loaded resume for {} from {}: {} experience records ({} ongoing), evaluated on {}",
        profile.person.full_name(),
        source.describe(),
        profile.experience.len(),
        profile.experience.ongoing_count(),
        today
    );
    if profile.experience.is_empty() {
        warn!("Resume has no experience records; career span will be omitted");
    }

    Ok(profile)
}
