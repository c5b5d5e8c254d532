//! End-to-end reporting flow against a recording backend double.

use std::fmt;
use std::sync::Mutex;

use anyhow::{bail, Result};
use sentry_reporter::{
    BackendClient, ContextFields, ErrorReporter, ReportContext, ReportableError, ReporterLogger,
};
use serde_json::{json, Value};

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl std::error::Error for DiskFull {}
impl ReportableError for DiskFull {}

#[derive(Default)]
struct RecordingBackend {
    calls: Mutex<Vec<(String, Option<Value>)>>,
    fail: bool,
}

impl BackendClient for RecordingBackend {
    fn notify(&self, error: &dyn ReportableError, metadata: Option<Value>) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((error.to_string(), metadata));
        if self.fail {
            bail!("service unavailable");
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl ReporterLogger for RecordingLogger {
    fn error(&self, _ctx: &dyn ContextFields, error: &anyhow::Error) {
        self.messages.lock().unwrap().push(format!("{error:#}"));
    }
}

#[test]
fn reports_error_with_context_fields_as_metadata() {
    let backend = RecordingBackend::default();
    let logger = RecordingLogger::default();
    let reporter = ErrorReporter::new(&backend, &logger);
    let ctx = ReportContext::new().with_field("user_id", "42");

    reporter.report_error(&ctx, &DiskFull);

    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "disk full");
    assert_eq!(calls[0].1, Some(json!({ "fields": { "user_id": "42" } })));
    assert!(logger.messages.lock().unwrap().is_empty());
}

#[test]
fn backend_failure_never_reaches_the_caller() {
    let backend = RecordingBackend {
        fail: true,
        ..Default::default()
    };
    let logger = RecordingLogger::default();
    let reporter = ErrorReporter::new(&backend, &logger);

    reporter.report_error(&(), &DiskFull);

    assert_eq!(backend.calls.lock().unwrap().len(), 1);
    let messages = logger.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("failed to report error"));
}
