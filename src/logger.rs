use crate::context::ContextFields;

/// Logger capability held by the reporter, used only to record failures of
/// the reporting pipeline itself.
pub trait ReporterLogger: Send + Sync {
    fn error(&self, ctx: &dyn ContextFields, error: &anyhow::Error);
}

impl<T: ReporterLogger + ?Sized> ReporterLogger for &T {
    fn error(&self, ctx: &dyn ContextFields, error: &anyhow::Error) {
        (**self).error(ctx, error);
    }
}

impl<T: ReporterLogger + ?Sized> ReporterLogger for std::sync::Arc<T> {
    fn error(&self, ctx: &dyn ContextFields, error: &anyhow::Error) {
        (**self).error(ctx, error);
    }
}

/// Default logger that emits through the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ReporterLogger for TracingLogger {
    fn error(&self, ctx: &dyn ContextFields, error: &anyhow::Error) {
        // `{:#}` renders the whole cause chain on one line.
        tracing::error!(fields = ?ctx.report_fields(), "{error:#}");
    }
}
