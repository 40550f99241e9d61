//! TOML profile loading.
//!
//! The profile lives at `<config dir>/logex/profile.toml`. A missing file is
//! not an error: the defaults describe a working setup.

mod structs;

pub use structs::{DEFAULT_KEY_COLOR, DEFAULT_VALUE_COLOR, Profile, TerminalProfile};

use crate::inspect::MarkerColors;
use crate::internal;
use crate::level::Level;
use std::fs;
use std::path::{Path, PathBuf};

impl Profile {
    /// Loads the profile from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be
    /// read, or the TOML is invalid.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("PROFILE", "Loading profile from default location");
        let path = Self::default_path()?;
        let profile = Self::load_from(&path)?;
        internal::info("PROFILE", &format!("Profile loaded from {}", path.display()));
        Ok(profile)
    }

    /// Loads the profile from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("PROFILE", "Profile not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses profile TOML.
    ///
    /// # Errors
    /// Returns error on invalid TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/logex/profile.toml`.
    ///
    /// # Errors
    /// Returns error if no home directory can be determined.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logex")
            .map(|dirs| dirs.config_dir().join("profile.toml"))
            .ok_or(crate::Error::ProfileDirNotFound)
    }

    /// Unknown level strings fall back to `Info`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level.parse().unwrap_or_else(|_| {
            internal::warn(
                "PROFILE",
                &format!("Unknown level '{}', using info", self.level),
            );
            Level::Info
        })
    }

    /// Marker colors for mapping reports: the configured strings minus a
    /// leading `#`. A malformed color is kept as written and surfaces as
    /// malformed markup.
    #[must_use]
    pub fn markers(&self) -> MarkerColors {
        MarkerColors::new(
            marker(&self.dict_key_color),
            marker(&self.dict_value_color),
        )
    }

    /// Directory saved logs go to, with `~`/`$VARS` expanded and relative
    /// paths joined onto `root`.
    #[must_use]
    pub fn save_dir(&self, root: &Path) -> PathBuf {
        let raw = self.log_save_path.as_str();
        let expanded =
            shellexpand::full(raw).unwrap_or_else(|_| shellexpand::tilde(raw));
        let path = PathBuf::from(expanded.as_ref());
        let path = if path.is_absolute() {
            path
        } else {
            root.join(path)
        };
        internal::trace("PROFILE", &format!("Resolved save dir: {}", path.display()));
        path
    }
}

fn marker(color: &str) -> &str {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let valid = matches!(hex.len(), 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    if !valid {
        internal::warn("PROFILE", &format!("Marker color '{color}' is not RRGGBB[AA] hex"));
    }
    hex
}
