//! Terminal sink: `[Level] (context) message`, with markup rendered as ANSI
//! escapes or stripped when colors are off.

use crate::fmt::{Color, style};
use crate::level::Level;

use super::{LogEvent, Sink};
use std::collections::HashMap;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct TerminalSink {
    /// Piped output and CI logs can't render ANSI escapes.
    colors_enabled: bool,
    /// Show the `(context)` part of an event.
    context_enabled: bool,
    level_colors: HashMap<Level, Color>,
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSink {
    #[must_use]
    pub fn new() -> Self {
        let mut level_colors = HashMap::new();
        level_colors.insert(Level::Trace, Color::gray());
        level_colors.insert(Level::Debug, Color::gray());
        level_colors.insert(Level::Info, Color::cyan());
        level_colors.insert(Level::Warning, Color::yellow());
        level_colors.insert(Level::Assert, Color::magenta());
        level_colors.insert(Level::Error, Color::red());

        Self {
            colors_enabled: true,
            context_enabled: true,
            level_colors,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn context(mut self, enabled: bool) -> Self {
        self.context_enabled = enabled;
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// The line written for `event`, without the trailing newline.
    #[must_use]
    pub fn format_event(&self, event: &LogEvent) -> String {
        let tag = format!("[{}]", event.level.label());
        let segments = style::parse(&event.message);

        let (tag, msg) = if self.colors_enabled {
            let color = self
                .level_colors
                .get(&event.level)
                .copied()
                .unwrap_or_else(Color::white);
            (
                format!("{}{tag}{}", color.fg_ansi(), Color::RESET),
                style::render(&segments),
            )
        } else {
            (tag, style::render_plain(&segments))
        };

        match &event.context {
            Some(context) if self.context_enabled => format!("{tag} ({context}) {msg}"),
            _ => format!("{tag} {msg}"),
        }
    }
}

impl Sink for TerminalSink {
    fn write(&self, event: &LogEvent) -> Result<(), crate::Error> {
        let line = self.format_event(event);

        if event.level >= Level::Warning {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
