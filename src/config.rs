use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials and environment label for the reporting backend.
///
/// Built by the host application once at startup and consumed by
/// [`SentryBackend::setup`](crate::backend::sentry::SentryBackend::setup).
#[derive(Clone, Deserialize, Serialize)]
pub struct ReporterConfig {
    /// Sentry DSN.
    pub api_key: String,
    /// Environment label attached to every event, e.g. "production".
    pub environment: String,
}

// The DSN must not end up in log output via `{:?}`.
impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("api_key", &"[redacted]")
            .field("environment", &self.environment)
            .finish()
    }
}
