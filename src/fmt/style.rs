//! Terminal rendering of rich-text markup.
//!
//! Parsing yields flat styled spans, so the same parse result can be rendered
//! with ANSI escapes for a terminal or as plain text. Unlike the strip functions
//! in [`super::markup`], the parser tracks nesting with a style stack.

use super::Color;

/// Style in effect for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Color>,
}

impl Style {
    #[must_use]
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && self.color.is_none()
    }

    fn ansi_prefix(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if self.italic {
            out.push_str("\x1b[3m");
        }
        if let Some(color) = self.color {
            out.push_str(&color.fg_ansi());
        }
        out
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    #[must_use]
    pub fn render(&self) -> String {
        if self.style.is_plain() {
            return self.text.clone();
        }
        format!("{}{}{}", self.style.ansi_prefix(), self.text, Color::RESET)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Frame {
    Bold,
    Italic,
    Color(Color),
    Size,
}

impl Frame {
    const fn name(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Color(_) => "color",
            Self::Size => "size",
        }
    }
}

enum Token {
    Open(Frame),
    Close(&'static str),
}

fn parse_tag(tag: &str) -> Option<Token> {
    if let Some(name) = tag.strip_prefix('/') {
        return match name {
            "b" => Some(Token::Close("b")),
            "i" => Some(Token::Close("i")),
            "color" => Some(Token::Close("color")),
            "size" => Some(Token::Close("size")),
            _ => None,
        };
    }

    match tag {
        "b" => return Some(Token::Open(Frame::Bold)),
        "i" => return Some(Token::Open(Frame::Italic)),
        _ => {}
    }

    let (name, value) = tag.split_once('=')?;
    match name {
        "color" => Some(Token::Open(Frame::Color(Color::from_hex(value)))),
        "size" if value.parse::<u32>().is_ok() => Some(Token::Open(Frame::Size)),
        _ => None,
    }
}

fn current_style(stack: &[Frame]) -> Style {
    let mut style = Style::default();
    for frame in stack {
        match frame {
            Frame::Bold => style.bold = true,
            Frame::Italic => style.italic = true,
            Frame::Color(c) => style.color = Some(*c),
            Frame::Size => {}
        }
    }
    style
}

fn push_text(segments: &mut Vec<Segment>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = segments.last_mut()
        && last.style == style
    {
        last.text.push_str(text);
        return;
    }
    segments.push(Segment {
        text: text.to_string(),
        style,
    });
}

/// Splits `msg` into styled spans. Unknown tags and stray `<` stay literal;
/// a close tag without a matching opener is dropped.
#[must_use]
pub fn parse(msg: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut rest = msg;

    while let Some(lt) = rest.find('<') {
        let style = current_style(&stack);
        push_text(&mut segments, &rest[..lt], style);
        rest = &rest[lt..];

        let token = rest[1..]
            .find('>')
            .and_then(|gt| parse_tag(&rest[1..=gt]).map(|t| (t, gt + 2)));

        match token {
            Some((Token::Open(frame), len)) => {
                stack.push(frame);
                rest = &rest[len..];
            }
            Some((Token::Close(name), len)) => {
                if let Some(pos) = stack.iter().rposition(|f| f.name() == name) {
                    stack.remove(pos);
                }
                rest = &rest[len..];
            }
            None => {
                push_text(&mut segments, "<", style);
                rest = &rest[1..];
            }
        }
    }

    push_text(&mut segments, rest, current_style(&stack));
    segments
}

/// ANSI rendering for terminals.
#[must_use]
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::render).collect()
}

/// Text content only.
#[must_use]
pub fn render_plain(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tags_combine_styles() {
        let segments = parse("<b>a<color=#FF0000FF>b</color></b>c");
        assert_eq!(segments.len(), 3);
        assert!(segments[0].style.bold);
        assert_eq!(segments[1].style.color, Some(Color::red()));
        assert!(segments[1].style.bold);
        assert!(segments[2].style.is_plain());
    }

    #[test]
    fn stray_angle_bracket_is_literal() {
        assert_eq!(render_plain(&parse("a < b <x> c")), "a < b <x> c");
    }
}
