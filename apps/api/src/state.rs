use std::sync::Arc;

use crate::clock::Clock;
use crate::config::Config;
use crate::resume::profile::ResumeProfile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup and never mutated.
    pub profile: Arc<ResumeProfile>,
    /// Evaluation date for records posted to the aggregate endpoint.
    pub clock: Arc<dyn Clock>,
}
