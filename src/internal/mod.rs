//! logex's own diagnostic console, so profile and recording problems are
//! reported through the same rendering as everything else.
//!
//! Uses `OnceLock`: the first `init` wins and later calls are no-ops.
//! Messages sent before `init` are dropped.

use crate::console::Console;
use crate::fmt;
use crate::level::Level;
use crate::profile::Profile;
use std::sync::OnceLock;

static INTERNAL_CONSOLE: OnceLock<Console> = OnceLock::new();

/// Initializes from the profile at the default location, falling back to defaults.
pub fn init() {
    let was_init = INTERNAL_CONSOLE.get().is_some();
    INTERNAL_CONSOLE.get_or_init(|| {
        let profile = Profile::load().unwrap_or_default();
        build_internal_console(&profile)
    });
    if !was_init {
        debug("INTERNAL", "Internal console ready");
    }
}

/// Initializes from an already-loaded profile.
pub fn init_with_profile(profile: &Profile) {
    let was_init = INTERNAL_CONSOLE.get().is_some();
    INTERNAL_CONSOLE.get_or_init(|| build_internal_console(profile));
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", profile.level));
        debug("INTERNAL", "Internal console ready");
    }
}

/// No profile is attached: the internal console never records.
fn build_internal_console(profile: &Profile) -> Console {
    let mut builder = Console::builder().level(profile.parse_level());
    if profile.terminal.enabled {
        builder = builder
            .terminal()
            .colors(profile.terminal.colors)
            .context(profile.terminal.context)
            .done();
    }
    builder.build()
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(console) = INTERNAL_CONSOLE.get() {
        console.log(level, format!("{} {msg}", fmt::bold(scope)));
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
