use crate::config::Config;
use crate::interview::coach::InterviewCoach;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The interview core. Constructed once at startup; carries the degraded
    /// no-model mode when no credential was configured.
    pub coach: InterviewCoach,
    pub config: Config,
}
