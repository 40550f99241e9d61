use logex::fmt::style::{Segment, Style, parse, render, render_plain};
use logex::fmt::{Color, RichText};

#[test]
fn parse_splits_plain_and_styled_segments() {
    let segments = parse("hello <b>world</b>!");
    assert_eq!(
        segments,
        vec![
            Segment {
                text: "hello ".to_string(),
                style: Style::default(),
            },
            Segment {
                text: "world".to_string(),
                style: Style {
                    bold: true,
                    ..Style::default()
                },
            },
            Segment {
                text: "!".to_string(),
                style: Style::default(),
            },
        ]
    );
}

#[test]
fn parse_color_tag_resolves_hex() {
    let segments = parse("<color=#0000FFFF>hi</color>");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].style.color, Some(Color::blue()));
}

#[test]
fn render_wraps_styled_runs_with_reset() {
    let segments = parse("<color=#010203FF>hi</color>");
    assert_eq!(render(&segments), "\x1b[38;2;1;2;3mhi\x1b[0m");
}

#[test]
fn render_plain_drops_every_tag() {
    let msg = "a".bold() + &"b".italic().sized(20) + &"c".color(Color::green());
    assert_eq!(render_plain(&parse(&msg)), "abc");
}

#[test]
fn unmatched_close_tag_is_dropped() {
    assert_eq!(render_plain(&parse("x</b>y")), "xy");
}

#[test]
fn unknown_tags_stay_literal() {
    assert_eq!(render_plain(&parse("<bold>x</bold>")), "<bold>x</bold>");
}
