//! Stepwise console construction.

use super::Console;
use crate::fmt::Color;
use crate::level::Level;
use crate::profile::Profile;
use crate::sink::{Sink, TerminalSink};
use std::path::PathBuf;
use std::sync::Mutex;

pub struct ConsoleBuilder {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
    profile: Option<Profile>,
    root_dir: PathBuf,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuilder {
    /// No sinks, no profile, `Info` and above, paths relative to the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            sinks: Vec::new(),
            profile: None,
            root_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Enables mapping reports and recording. Marker colors are derived here, once.
    #[must_use]
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Directory a relative `log_save_path` is resolved against.
    #[must_use]
    pub fn root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = dir.into();
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            sink: TerminalSink::new(),
        }
    }

    /// Adds a custom sink, e.g. a bridge into a host logger.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn build(self) -> Console {
        let markers = self.profile.as_ref().map(Profile::markers);
        Console {
            min_level: self.min_level,
            sinks: self.sinks,
            profile: self.profile,
            markers,
            root_dir: self.root_dir,
            recorder: Mutex::new(None),
        }
    }
}

pub struct TerminalBuilder {
    parent: ConsoleBuilder,
    sink: TerminalSink,
}

impl TerminalBuilder {
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.sink = self.sink.colors(enabled);
        self
    }

    /// Shows or hides the `(context)` part of each line.
    #[must_use]
    pub fn context(mut self, enabled: bool) -> Self {
        self.sink = self.sink.context(enabled);
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.sink = self.sink.level_color(level, color);
        self
    }

    /// Returns to the console builder.
    #[must_use]
    pub fn done(mut self) -> ConsoleBuilder {
        self.parent.sinks.push(Box::new(self.sink));
        self.parent
    }
}

impl Console {
    /// Console wired from a profile: its level, its terminal settings, and the profile itself.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        let mut builder = Self::builder().level(profile.parse_level());

        if profile.terminal.enabled {
            builder = builder
                .terminal()
                .colors(profile.terminal.colors)
                .context(profile.terminal.context)
                .done();
        }

        builder.profile(profile.clone()).build()
    }
}
