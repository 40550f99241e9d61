//! Multi-line reports for sequences, sets and mappings.
//!
//! Every report starts with type header lines and annotates each element with
//! its position. The final element's trailing `", "` separator is trimmed and
//! the report always ends with exactly one line break. Empty collections
//! produce the header lines alone.

use super::kind::{Inspect, TypeKind};
use super::trace::trace_name;
use crate::fmt::markup;

/// Hex colors (`RRGGBB` or `RRGGBBAA`, no `#`) that tell keys and values apart in mapping reports.
///
/// Used verbatim inside `<color=#...>` tags; nothing validates them, so a bad
/// value shows up as malformed markup rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerColors {
    pub key: String,
    pub value: String,
}

impl MarkerColors {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn key_span(&self, text: &str) -> String {
        markup::COLOR.wrap(text, &format!("#{}", self.key))
    }

    fn value_span(&self, text: &str) -> String {
        markup::COLOR.wrap(text, &format!("#{}", self.value))
    }
}

const SEPARATOR: &str = ", ";

fn eol(line_breaks: bool) -> &'static str {
    if line_breaks { "\n" } else { "" }
}

/// Drops the trailing line break and separator of the last element, then
/// closes the report. A body-less report is left untouched.
fn finish(line: &mut String, header_len: usize) {
    if line.len() == header_len {
        return;
    }
    if line.ends_with('\n') {
        line.pop();
    }
    if line.ends_with(SEPARATOR) {
        line.truncate(line.len() - SEPARATOR.len());
    }
    line.push('\n');
}

fn render_items<'a, T, I>(items: I, line_breaks: bool) -> String
where
    T: Inspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let eol = eol(line_breaks);
    let mut line = format!("Type {}", trace_name::<T>());
    let header_len = line.len();

    for (i, item) in items.into_iter().enumerate() {
        if item.kind() == TypeKind::Record {
            line.push_str(&format!("[{i}]\n"));
            for field in item.fields() {
                line.push_str(&format!(" {} : {}{eol}", field.name, field.value));
            }
        } else {
            line.push_str(&format!("[{i}] {}{SEPARATOR}{eol}", item.to_text()));
        }
    }

    finish(&mut line, header_len);
    line
}

/// Renders an ordered sequence.
///
/// ```
/// let report = logex::inspect::sequence(&[1, 2, 3], true);
/// assert_eq!(report, "Type at (i32)\n[0] 1, \n[1] 2, \n[2] 3\n");
/// ```
#[must_use]
pub fn sequence<T: Inspect>(values: &[T], line_breaks: bool) -> String {
    render_items(values, line_breaks)
}

/// Renders a set in its own iteration order: sorted for `BTreeSet`, hash
/// order for `HashSet` (stable for a given set within a process run).
#[must_use]
pub fn set<'a, T, I>(values: I, line_breaks: bool) -> String
where
    T: Inspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<&T> = values.into_iter().collect();
    render_items(items, line_breaks)
}

/// Renders a mapping in its iteration order, keys and values painted with `markers`.
#[must_use]
pub fn mapping<'a, K, V, I>(values: I, markers: &MarkerColors, line_breaks: bool) -> String
where
    K: Inspect + 'a,
    V: Inspect + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let eol = eol(line_breaks);
    let mut line = String::new();
    line.push_str(&format!(
        "Type({}) {}",
        markers.key_span("Key"),
        trace_name::<K>()
    ));
    line.push_str(&format!(
        "Type({}) {}",
        markers.value_span("Value"),
        trace_name::<V>()
    ));
    let header_len = line.len();

    for (key, value) in values {
        let key = markers.key_span(&format!("Key: {}", key.to_text()));
        let value = markers.value_span(&format!("Value: {}", value.to_text()));
        line.push_str(&format!("{key} | {value}{SEPARATOR}{eol}"));
    }

    finish(&mut line, header_len);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_trims_separator_and_break() {
        let mut line = "H\n[0] 1, \n".to_string();
        finish(&mut line, 2);
        assert_eq!(line, "H\n[0] 1\n");
    }

    #[test]
    fn finish_without_line_breaks() {
        let mut line = "H\n[0] 1, [1] 2, ".to_string();
        finish(&mut line, 2);
        assert_eq!(line, "H\n[0] 1, [1] 2\n");
    }

    #[test]
    fn finish_leaves_header_only_report_alone() {
        let mut line = "H\n".to_string();
        finish(&mut line, 2);
        assert_eq!(line, "H\n");
    }
}
