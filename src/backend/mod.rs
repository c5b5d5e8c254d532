//! Boundary to the external error-tracking service.
//!
//! The wire protocol belongs to the service; this module only defines the
//! seam the reporter submits through, plus the Sentry implementation of it.

pub mod sentry;

use anyhow::Result;
use serde_json::Value;

use crate::trace::ReportableError;

/// Outbound boundary to the error-tracking service.
///
/// `metadata`, when present, is attached to the outgoing event verbatim; the
/// reporter shapes it as `{"fields": <fields>}`. Implementations own
/// transmission and their own synchronization. Callers never retry: a
/// returned error is logged by the reporter and dropped.
pub trait BackendClient: Send + Sync {
    fn notify(&self, error: &dyn ReportableError, metadata: Option<Value>) -> Result<()>;
}

impl<T: BackendClient + ?Sized> BackendClient for &T {
    fn notify(&self, error: &dyn ReportableError, metadata: Option<Value>) -> Result<()> {
        (**self).notify(error, metadata)
    }
}

impl<T: BackendClient + ?Sized> BackendClient for std::sync::Arc<T> {
    fn notify(&self, error: &dyn ReportableError, metadata: Option<Value>) -> Result<()> {
        (**self).notify(error, metadata)
    }
}
