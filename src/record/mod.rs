//! Capturing log output into a file.
//!
//! A [`Recorder`] accumulates one block per event:
//!
//! ```text
//! [Warning]
//! disk almost full
//!
//! <stack trace, when enabled>
//! ```
//!
//! Saving strips all rich-text markup and writes the whole buffer at once to
//! `<yyyyMMdd>_<HHmm>_editor.txt` in the save directory.

use crate::fmt::strip_markup;
use crate::level::Level;
use crate::sink::LogEvent;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    buffer: String,
    save_stack_trace: bool,
    entries: usize,
}

impl Recorder {
    #[must_use]
    pub fn new(save_stack_trace: bool) -> Self {
        Self {
            buffer: String::new(),
            save_stack_trace,
            entries: 0,
        }
    }

    /// Appends one block. `stack_trace` is written only when the recorder saves traces.
    pub fn append(&mut self, level: Level, message: &str, stack_trace: Option<&str>) {
        self.buffer.push_str(&format!("[{}]\n{message}\n\n", level.label()));
        if self.save_stack_trace
            && let Some(trace) = stack_trace
        {
            self.buffer.push_str(trace);
            self.buffer.push('\n');
        }
        self.entries += 1;
    }

    /// Appends an event together with the backtrace it carries.
    pub fn record(&mut self, event: &LogEvent) {
        self.append(event.level, &event.message, event.stack_trace.as_deref());
    }

    /// The raw buffer, markup included.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    #[must_use]
    pub const fn saves_stack_trace(&self) -> bool {
        self.save_stack_trace
    }

    /// `20260131_0942_editor.txt`
    #[must_use]
    pub fn file_name(at: &DateTime<Local>) -> String {
        format!("{}_editor.txt", at.format("%Y%m%d_%H%M"))
    }

    /// Writes the stripped buffer into `dir`, named after the current local time.
    ///
    /// # Errors
    /// [`crate::Error::SaveDirMissing`] when `dir` does not exist, or the I/O error of the write.
    pub fn save(self, dir: &Path) -> Result<PathBuf, crate::Error> {
        self.save_at(dir, &Local::now())
    }

    /// Same as [`save`](Self::save) with an explicit timestamp.
    ///
    /// # Errors
    /// [`crate::Error::SaveDirMissing`] when `dir` does not exist, or the I/O error of the write.
    pub fn save_at(self, dir: &Path, at: &DateTime<Local>) -> Result<PathBuf, crate::Error> {
        if !dir.is_dir() {
            return Err(crate::Error::SaveDirMissing(dir.to_path_buf()));
        }
        let path = dir.join(Self::file_name(at));
        fs::write(&path, strip_markup(&self.buffer))?;
        Ok(path)
    }
}
