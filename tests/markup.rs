use logex::fmt::markup::{BOLD, COLOR, ITALIC, SIZE};
use logex::fmt::{Color, RichText, bold, color, italic, sized, strip_all_markup, strip_markup};

#[test]
fn helpers_wrap_text() {
    assert_eq!(bold("x"), "<b>x</b>");
    assert_eq!(italic("x"), "<i>x</i>");
    assert_eq!(sized("x", 14), "<size=14>x</size>");
    assert_eq!(color("x", Color::red()), "<color=#FF0000FF>x</color>");
}

#[test]
fn strip_mixed_markup() {
    assert_eq!(
        strip_markup("<color=#FF0000FF>hello</color> <b>world</b>"),
        "hello world"
    );
}

#[test]
fn strip_inverts_color_for_plain_text() {
    let colors = [
        Color::red(),
        Color::new(0.1, 0.2, 0.3, 0.4),
        Color::black(),
        Color::new(0.8, 0.023, 0.0, 1.0),
    ];
    for text in ["", "plain", "a < b", "multi\nline", "ünïcode ✓"] {
        for c in colors {
            assert_eq!(strip_markup(&color(text, c)), text);
        }
    }
}

#[test]
fn strip_inverts_bold_and_italic() {
    for text in ["", "word", "two words", "<color"] {
        assert_eq!(strip_markup(&bold(text)), text);
        assert_eq!(strip_markup(&italic(text)), text);
    }
}

#[test]
fn strip_removes_all_opens_before_closes() {
    assert_eq!(strip_markup("<b><i>x</b></i>"), "x");
    assert_eq!(strip_markup("</b>x<b>"), "x");
}

#[test]
fn strip_keeps_unterminated_color_opener() {
    assert_eq!(strip_markup("a <color=#FFF b"), "a <color=#FFF b");
}

#[test]
fn strip_leaves_size_tags_unless_asked() {
    let text = sized("big", 30);
    assert_eq!(strip_markup(&text), text);
    assert_eq!(strip_all_markup(&text), "big");
}

#[test]
fn strip_handles_nested_colors() {
    let inner = color("in", Color::green());
    let outer = color(&format!("out {inner} out"), Color::blue());
    assert_eq!(strip_markup(&outer), "out in out");
}

#[test]
fn tag_tokens() {
    assert_eq!(BOLD.open(), "<b>");
    assert_eq!(ITALIC.close(), "</i>");
    assert_eq!(COLOR.opener(), "<color=");
    assert_eq!(SIZE.close(), "</size>");
}

#[test]
fn rich_text_trait_chains() {
    let marked = "failed".bold().color(Color::red());
    assert_eq!(marked, "<color=#FF0000FF><b>failed</b></color>");
    assert_eq!(marked.strip_markup(), "failed");
}
