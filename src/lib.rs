//! Routes application errors to Sentry, attaching contextual metadata and,
//! when an error carries one, a stack trace captured at its origin.
//!
//! Reporting is fire-and-forget: submission failures are logged through the
//! injected logger and never surface to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use sentry_reporter::{
//!     ErrorReporter, ReportContext, ReporterConfig, SentryBackend, Traced, TracingLogger,
//! };
//!
//! let backend = SentryBackend::setup(ReporterConfig {
//!     api_key: "https://key@o0.ingest.sentry.io/0".to_string(),
//!     environment: "production".to_string(),
//! });
//! let reporter = ErrorReporter::new(backend, TracingLogger);
//!
//! let ctx = ReportContext::new().with_field("user_id", "42");
//! let error = Traced::new(std::io::Error::other("disk full"));
//! reporter.report_error(&ctx, &error);
//! ```

pub mod backend;
pub mod config;
pub mod context;
pub mod logger;
pub mod reporter;
pub mod trace;

pub use backend::sentry::SentryBackend;
pub use backend::BackendClient;
pub use config::ReporterConfig;
pub use context::{ContextFields, Fields, ReportContext};
pub use logger::{ReporterLogger, TracingLogger};
pub use reporter::ErrorReporter;
pub use trace::{capture_stack_frames, ReportableError, TraceFrame, Traced};
