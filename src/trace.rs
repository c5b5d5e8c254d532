use std::error::Error;
use std::fmt;

use backtrace::Backtrace;

/// A single stack frame as captured at an error's origin.
///
/// `line` holds the textual line marker the capture produced. Conversion to a
/// numeric line number happens when the frame is mapped for the backend, and
/// frames whose marker is not numeric are dropped there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub function: String,
    pub file: String,
    pub line: String,
}

impl TraceFrame {
    pub fn new(
        function: impl Into<String>,
        file: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        TraceFrame {
            function: function.into(),
            file: file.into(),
            line: line.into(),
        }
    }
}

/// An error that can be handed to the reporter.
///
/// The stack-frame capability is optional: the default is no trace, and the
/// backend attaches nothing in that case.
pub trait ReportableError: Error + Send + Sync {
    /// Frames captured at the error's origin, outermost call first.
    fn stack_frames(&self) -> Option<&[TraceFrame]> {
        None
    }
}

/// Wraps an error and captures the current call stack, giving any error the
/// stack-frame capability.
#[derive(Debug)]
pub struct Traced<E> {
    source: E,
    frames: Vec<TraceFrame>,
}

impl<E: Error + Send + Sync> Traced<E> {
    pub fn new(source: E) -> Self {
        Traced {
            source,
            frames: capture_stack_frames(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Traced<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.source.fmt(f)
    }
}

impl<E: Error + 'static> Error for Traced<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<E: Error + Send + Sync + 'static> ReportableError for Traced<E> {
    fn stack_frames(&self) -> Option<&[TraceFrame]> {
        Some(&self.frames)
    }
}

/// Captures and symbolicates the current call stack as [`TraceFrame`]s.
///
/// Frames without a resolved symbol name, file, or line are omitted.
pub fn capture_stack_frames() -> Vec<TraceFrame> {
    let backtrace = Backtrace::new();
    backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(|symbol| {
            Some(TraceFrame::new(
                symbol.name()?.to_string(),
                symbol.filename()?.display().to_string(),
                symbol.lineno()?.to_string(),
            ))
        })
        .collect()
}
