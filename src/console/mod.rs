//! The logging façade: one entry point over every [`Payload`] shape, fanning
//! rendered events out to the configured sinks and the active recording.

mod builder;
mod payload;

pub use builder::{ConsoleBuilder, TerminalBuilder};
pub use payload::{Payload, Report};

use crate::inspect::MarkerColors;
use crate::internal;
use crate::level::Level;
use crate::profile::Profile;
use crate::record::Recorder;
use crate::sink::{LogEvent, Sink};
use std::backtrace::Backtrace;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Name of the object a log event is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context(String);

impl Context {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-call knobs.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub context: Option<Context>,
    /// Put every collection element on its own line.
    pub line_breaks: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            context: None,
            line_breaks: true,
        }
    }
}

impl LogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(Context::new(context));
        self
    }

    #[must_use]
    pub const fn line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }
}

/// Thread-safe: the only mutable state is the recording slot, behind a mutex.
pub struct Console {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
    profile: Option<Profile>,
    markers: Option<MarkerColors>,
    root_dir: PathBuf,
    recorder: Mutex<Option<Recorder>>,
}

impl Default for Console {
    fn default() -> Self {
        ConsoleBuilder::new().build()
    }
}

impl Console {
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Logs `payload` at `level` with default options.
    pub fn log<'a>(&self, level: Level, payload: impl Into<Payload<'a>>) {
        self.log_with(level, payload, &LogOptions::default());
    }

    /// Renders `payload` and dispatches it.
    ///
    /// A mapping payload needs marker colors from the profile. Without one,
    /// an error event is logged instead and the payload is dropped.
    pub fn log_with<'a>(
        &self,
        level: Level,
        payload: impl Into<Payload<'a>>,
        options: &LogOptions,
    ) {
        let _ = self.try_log_with(level, payload, options);
    }

    /// Same as [`log_with`](Self::log_with), but hands the rendering error back.
    ///
    /// # Errors
    /// [`crate::Error::ProfileMissing`] for a mapping payload on a console
    /// without a profile. The error event is dispatched either way.
    pub fn try_log_with<'a>(
        &self,
        level: Level,
        payload: impl Into<Payload<'a>>,
        options: &LogOptions,
    ) -> Result<(), crate::Error> {
        if level < self.min_level {
            return Ok(());
        }

        let payload = payload.into();
        let context = options.context.as_ref().map(ToString::to_string);

        match payload.render(self.markers.as_ref(), options.line_breaks) {
            Ok(message) => {
                self.dispatch(LogEvent {
                    level,
                    message,
                    context,
                    stack_trace: None,
                });
                Ok(())
            }
            Err(e) => {
                self.dispatch(LogEvent {
                    level: Level::Error,
                    message: format!("logex: {} payload not logged: {e}", payload.shape()),
                    context,
                    stack_trace: None,
                });
                Err(e)
            }
        }
    }

    pub fn info<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.log(Level::Info, payload);
    }

    pub fn warning<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.log(Level::Warning, payload);
    }

    pub fn error<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.log(Level::Error, payload);
    }

    pub fn assertion<'a>(&self, payload: impl Into<Payload<'a>>) {
        self.log(Level::Assert, payload);
    }

    /// Template variant: `console.log_fmt(Level::Info, format_args!("{} items", n))`.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log(level, args);
    }

    /// Logs `payload` as a failed assertion when `condition` is false.
    pub fn assert<'a>(&self, condition: bool, payload: impl Into<Payload<'a>>) {
        if !condition {
            self.log(Level::Assert, payload);
        }
    }

    pub fn assert_fmt(&self, condition: bool, args: fmt::Arguments<'_>) {
        if !condition {
            self.log(Level::Assert, args);
        }
    }

    fn dispatch(&self, mut event: LogEvent) {
        if event.level < self.min_level {
            return;
        }

        // Must not run under the recorder lock.
        if self.captures_stack_trace() {
            event.stack_trace = Some(Backtrace::force_capture().to_string());
        }

        for sink in &self.sinks {
            let _ = sink.write(&event);
        }

        if let Some(recorder) = self.lock_recorder().as_mut() {
            recorder.record(&event);
        }
    }

    fn captures_stack_trace(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.save_stack_trace) && self.is_recording()
    }

    fn lock_recorder(&self) -> MutexGuard<'_, Option<Recorder>> {
        self.recorder.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts capturing every dispatched event. A second start while recording is a no-op.
    ///
    /// # Errors
    /// [`crate::Error::ProfileMissing`] when the console has no profile; an
    /// error event is logged as well.
    pub fn record_start(&self) -> Result<(), crate::Error> {
        let Some(profile) = &self.profile else {
            self.error("logex: no profile configured, recording not started");
            return Err(crate::Error::ProfileMissing);
        };

        let mut slot = self.lock_recorder();
        if slot.is_some() {
            internal::debug("RECORD", "Recording already active");
            return Ok(());
        }
        *slot = Some(Recorder::new(profile.save_stack_trace));
        drop(slot);

        internal::debug("RECORD", "Recording started");
        Ok(())
    }

    /// Stops capturing and writes the recording to the profile's save directory.
    ///
    /// # Errors
    /// [`crate::Error::NotRecording`] without a matching start. A missing save
    /// directory or a failed write is logged at error level and returned.
    pub fn record_stop(&self) -> Result<PathBuf, crate::Error> {
        let recorder = self.lock_recorder().take();
        let Some(recorder) = recorder else {
            return Err(crate::Error::NotRecording);
        };
        let Some(profile) = &self.profile else {
            return Err(crate::Error::ProfileMissing);
        };

        let dir = profile.save_dir(&self.root_dir);
        match recorder.save(&dir) {
            Ok(path) => {
                internal::info("RECORD", &format!("Saved log to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                self.error(format!("logex: failed to save log: {e}"));
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.lock_recorder().is_some()
    }

    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}
