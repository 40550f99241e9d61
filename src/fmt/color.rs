//! Colors travel through the crate in two encodings: hex codes inside markup
//! (`<color=#RRGGBBAA>`) and a decimal tuple for humans reading the log.

use std::fmt;

/// Four channels in the unit interval, matching the color values of the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the `#` is optional). Falls back to
    /// white on malformed input so a typo in a profile doesn't abort logging.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Self::white();
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_or(1.0, |v| f32::from(v) / 255.0)
        };

        let a = if hex.len() == 8 { channel(6) } else { 1.0 };
        Self::new(channel(0), channel(2), channel(4), a)
    }

    /// Channels quantized to bytes; out-of-range channels are clamped.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// `RRGGBBAA`, uppercase, no leading `#`.
    #[must_use]
    pub fn to_hex_rgba(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// `RRGGBB`, uppercase, no leading `#`. Marker colors in collection reports use this form.
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("{r:02X}{g:02X}{b:02X}")
    }

    /// The `\x1b[38;2;R;G;Bm` escape for 24-bit terminals. Alpha is ignored.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    #[must_use]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::rgb(1.0, 0.92, 0.016)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::rgb(0.0, 1.0, 1.0)
    }

    #[must_use]
    pub const fn magenta() -> Self {
        Self::rgb(1.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn gray() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }

    /// The one-line report logged for a color payload: a swatch of the hex
    /// code painted in the color itself, then the decimal tuple.
    #[must_use]
    pub fn report(self) -> String {
        let hex = format!("#{}", self.to_hex_rgba());
        format!("{}  {self}", super::markup::color(&hex, self))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
