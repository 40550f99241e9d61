//! Where rendered log events go.
//!
//! The console only formats; sinks decide how an event is displayed or
//! stored. Implement [`Sink`] to forward events to a host logger.

mod terminal;

pub use terminal::TerminalSink;

use crate::level::Level;

/// One rendered log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: Level,
    /// Fully rendered message. May contain rich-text markup.
    pub message: String,
    /// Name of the object the event is attributed to.
    pub context: Option<String>,
    /// Backtrace captured at the logging call, present while a recording
    /// with `save_stack_trace` is active.
    pub stack_trace: Option<String>,
}

impl LogEvent {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: None,
            stack_trace: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }
}

/// `Send + Sync` so a console can be shared across threads.
pub trait Sink: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write(&self, event: &LogEvent) -> Result<(), crate::Error>;

    /// Pushes out anything the sink buffers.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), crate::Error>;
}
