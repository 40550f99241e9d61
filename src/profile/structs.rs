//! Profile struct definitions.

use crate::fmt::Color;
use serde::Deserialize;

/// Key marker color used when the profile doesn't set one.
pub const DEFAULT_KEY_COLOR: Color = Color::new(0.8, 0.023, 0.0, 1.0);
/// Value marker color used when the profile doesn't set one.
pub const DEFAULT_VALUE_COLOR: Color = Color::new(0.0, 0.119, 0.69, 1.0);

/// Settings consumed by reports, the recorder and the console.
///
/// An empty profile file is valid; every field has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Directory saved logs are written to. `~` and `$VARS` are expanded;
    /// relative paths are resolved against the console's root directory.
    pub log_save_path: String,
    /// Append a backtrace to every recorded entry.
    pub save_stack_trace: bool,
    /// Key marker color as `#RRGGBB` or `#RRGGBBAA`, used verbatim in markup.
    pub dict_key_color: String,
    /// Value marker color as `#RRGGBB` or `#RRGGBBAA`.
    pub dict_value_color: String,
    /// Minimum level the console forwards.
    pub level: String,
    /// Terminal sink settings.
    pub terminal: TerminalProfile,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            log_save_path: "logex/logs".to_string(),
            save_stack_trace: true,
            dict_key_color: format!("#{}", DEFAULT_KEY_COLOR.to_hex_rgb()),
            dict_value_color: format!("#{}", DEFAULT_VALUE_COLOR.to_hex_rgb()),
            level: "info".to_string(),
            terminal: TerminalProfile::default(),
        }
    }
}

/// Terminal sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalProfile {
    /// Enable terminal output.
    pub enabled: bool,
    /// Render markup as ANSI escapes instead of stripping it.
    pub colors: bool,
    /// Show the `(context)` part of each line.
    pub context: bool,
}

impl Default for TerminalProfile {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            context: true,
        }
    }
}
