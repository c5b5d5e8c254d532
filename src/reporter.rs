use serde_json::json;

use crate::backend::BackendClient;
use crate::context::ContextFields;
use crate::logger::ReporterLogger;
use crate::trace::ReportableError;

/// Facade the application reports errors through, independent of the backend
/// behind it.
///
/// Reporting is fire-and-forget by contract: `report_error` returns nothing,
/// so a failing observability pipeline can never alter application control
/// flow. A failure to submit is logged once through the injected logger and
/// dropped, never retried.
pub struct ErrorReporter<B, L> {
    backend: B,
    logger: L,
}

impl<B: BackendClient, L: ReporterLogger> ErrorReporter<B, L> {
    pub fn new(backend: B, logger: L) -> Self {
        ErrorReporter { backend, logger }
    }

    /// Reports `error` to the backend, attaching the fields carried by `ctx`
    /// as `{"fields": <fields>}` metadata. An empty context submits without
    /// metadata.
    pub fn report_error<C: ContextFields>(&self, ctx: &C, error: &dyn ReportableError) {
        let fields = ctx.report_fields();
        let metadata = if fields.is_empty() {
            None
        } else {
            Some(json!({ "fields": fields }))
        };

        if let Err(submission_error) = self.backend.notify(error, metadata) {
            let wrapped = submission_error.context("failed to report error to backend");
            self.logger.error(ctx, &wrapped);
        }
    }
}
