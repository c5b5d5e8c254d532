use anyhow::{ensure, Result};
use sentry::protocol::{Event, Exception, Frame, Stacktrace};
use sentry::{ClientInitGuard, ClientOptions};
use serde_json::Value;

use crate::backend::BackendClient;
use crate::config::ReporterConfig;
use crate::trace::{ReportableError, TraceFrame};

/// Handle to the process-wide Sentry client.
pub struct SentryBackend {
    guard: ClientInitGuard,
}

impl SentryBackend {
    /// Initializes the Sentry client process-wide and returns the owning
    /// handle. Expected to run once, during startup, before concurrent
    /// traffic; calling it again rebinds the global hub and the last
    /// configuration wins. Dropping the handle flushes pending events.
    ///
    /// The default integrations are left out so panics are never reported
    /// automatically; reporting stays explicit via the reporter.
    pub fn setup(config: ReporterConfig) -> Self {
        let guard = sentry::init((
            config.api_key.as_str(),
            ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.into()),
                default_integrations: false,
                attach_stacktrace: false,
                ..Default::default()
            },
        ));

        SentryBackend { guard }
    }
}

impl BackendClient for SentryBackend {
    fn notify(&self, error: &dyn ReportableError, metadata: Option<Value>) -> Result<()> {
        ensure!(
            self.guard.is_enabled(),
            "sentry client is disabled (empty or invalid DSN)"
        );

        self.guard.capture_event(build_event(error, metadata), None);
        Ok(())
    }
}

/// Shapes the outgoing event before it is handed to the transport. This
/// transform never fails and never blocks transmission.
///
/// The event's display class is the error's string rendering, verbatim. A
/// stack trace is attached only when the error exposes one.
fn build_event(error: &dyn ReportableError, metadata: Option<Value>) -> Event<'static> {
    let message = error.to_string();

    let mut event = Event {
        level: sentry::Level::Error,
        ..Default::default()
    };

    event.exception = vec![Exception {
        ty: message.clone(),
        value: Some(message),
        stacktrace: error.stack_frames().map(map_frames),
        ..Default::default()
    }]
    .into();

    if let Some(Value::Object(metadata)) = metadata {
        event.extra.extend(metadata);
    }

    event
}

/// Maps captured frames to the backend's frame records.
///
/// A frame whose line marker does not parse as an integer is dropped;
/// surviving frames keep their source order. Nothing is logged for drops.
fn map_frames(frames: &[TraceFrame]) -> Stacktrace {
    let frames = frames
        .iter()
        .filter_map(|frame| {
            let lineno = frame.line.parse::<u64>().ok()?;
            Some(Frame {
                function: Some(frame.function.clone()),
                filename: Some(frame.file.clone()),
                lineno: Some(lineno),
                in_app: Some(true),
                ..Default::default()
            })
        })
        .collect();

    Stacktrace {
        frames,
        ..Default::default()
    }
}
