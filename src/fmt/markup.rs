//! Inline rich-text tags understood by markup-aware log viewers.
//!
//! Two tag families exist. Fixed tags (`<b>`, `<i>`) have literal open and
//! close tokens. Attributed tags (`<color=#FF0000FF>`, `<size=14>`) embed a
//! value in the opener, which ends at the next `>`.
//!
//! Tags are never parsed into a tree here. Stripping is a linear
//! scan-and-splice over the buffer: attributed tags first, then fixed tags,
//! and within each fixed tag every opener before any closer. Badly nested
//! markup degrades to best-effort deletion instead of an error.

use super::Color;

/// A tag with literal open and close tokens and no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTag {
    name: &'static str,
}

impl FixedTag {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn open(self) -> String {
        format!("<{}>", self.name)
    }

    #[must_use]
    pub fn close(self) -> String {
        format!("</{}>", self.name)
    }

    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        format!("<{0}>{text}</{0}>", self.name)
    }

    /// Removes every open token, then every close token.
    #[must_use]
    pub fn strip(self, input: &str) -> String {
        let mut out = input.to_string();
        remove_all(&mut out, &self.open());
        remove_all(&mut out, &self.close());
        out
    }
}

/// A tag whose opener carries a single value, e.g. `<color=#FF0000FF>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributedTag {
    name: &'static str,
}

impl AttributedTag {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The literal prefix of the opener, `<name=`.
    #[must_use]
    pub fn opener(self) -> String {
        format!("<{}=", self.name)
    }

    #[must_use]
    pub fn close(self) -> String {
        format!("</{}>", self.name)
    }

    #[must_use]
    pub fn wrap(self, text: &str, value: &str) -> String {
        format!("<{0}={value}>{text}</{0}>", self.name)
    }

    /// Removes every opener span (`<name=` through the next `>`), then every
    /// close token.
    ///
    /// An opener with no `>` after it is left in place; since no later opener
    /// can have one either, scanning stops there.
    #[must_use]
    pub fn strip(self, input: &str) -> String {
        let opener = self.opener();
        let mut out = input.to_string();

        while let Some(start) = out.find(&opener) {
            let Some(end) = out[start..].find('>') else {
                break;
            };
            out.replace_range(start..=start + end, "");
        }

        remove_all(&mut out, &self.close());
        out
    }
}

pub const BOLD: FixedTag = FixedTag::new("b");
pub const ITALIC: FixedTag = FixedTag::new("i");
pub const COLOR: AttributedTag = AttributedTag::new("color");
pub const SIZE: AttributedTag = AttributedTag::new("size");

fn remove_all(buf: &mut String, token: &str) {
    while let Some(index) = buf.find(token) {
        buf.replace_range(index..index + token.len(), "");
    }
}

/// Wraps `text` in a color tag using the `#RRGGBBAA` encoding of `color`.
#[must_use]
pub fn color(text: &str, color: Color) -> String {
    COLOR.wrap(text, &format!("#{}", color.to_hex_rgba()))
}

#[must_use]
pub fn bold(text: &str) -> String {
    BOLD.wrap(text)
}

#[must_use]
pub fn italic(text: &str) -> String {
    ITALIC.wrap(text)
}

#[must_use]
pub fn sized(text: &str, size: u32) -> String {
    SIZE.wrap(text, &size.to_string())
}

/// Removes color, bold and italic markup, leaving text fit for a plain log file.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let out = COLOR.strip(input);
    let out = BOLD.strip(&out);
    ITALIC.strip(&out)
}

/// Like [`strip_markup`], but also removes `<size=...>` tags.
#[must_use]
pub fn strip_all_markup(input: &str) -> String {
    SIZE.strip(&strip_markup(input))
}

/// Method-call sugar for the markup helpers: `"failed".bold().color(Color::red())`.
pub trait RichText {
    fn color(&self, color: Color) -> String;
    fn bold(&self) -> String;
    fn italic(&self) -> String;
    fn sized(&self, size: u32) -> String;
    fn strip_markup(&self) -> String;
}

impl RichText for str {
    fn color(&self, c: Color) -> String {
        color(self, c)
    }

    fn bold(&self) -> String {
        bold(self)
    }

    fn italic(&self) -> String {
        italic(self)
    }

    fn sized(&self, size: u32) -> String {
        sized(self, size)
    }

    fn strip_markup(&self) -> String {
        strip_markup(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_all_rescans_spliced_tokens() {
        let mut s = "a<<b>b>c".to_string();
        remove_all(&mut s, "<b>");
        assert_eq!(s, "ac");
    }

    #[test]
    fn unterminated_opener_is_kept() {
        assert_eq!(COLOR.strip("x <color=#FF0000FF tail"), "x <color=#FF0000FF tail");
    }

    #[test]
    fn unterminated_opener_after_valid_one() {
        assert_eq!(
            COLOR.strip("<color=#00FF00FF>ok</color> <color=bad"),
            "ok <color=bad"
        );
    }
}
