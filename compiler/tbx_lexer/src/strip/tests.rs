use super::*;
use pretty_assertions::assert_eq;

const LB: TextCode = TextCode::control(ControlKind::LineBreak);
const BB: TextCode = TextCode::control(ControlKind::BoxBreak);

fn chars(s: &str) -> Vec<TextCode> {
    s.chars().map(TextCode::Char).collect()
}

fn with_breaks(s: &str) -> Vec<TextCode> {
    s.chars()
        .map(|c| match c {
            '&' => LB,
            '^' => BB,
            c => TextCode::Char(c),
        })
        .collect()
}

#[test]
fn nothing_to_strip() {
    let codes = with_breaks("a&b^c");
    assert_eq!(strip_breaks(&codes, StripOptions::NONE), codes);
}

#[test]
fn break_between_words_becomes_space() {
    assert_eq!(strip_breaks(&with_breaks("a&b"), StripOptions::ALL), chars("a b"));
}

#[test]
fn break_next_to_space_is_dropped() {
    assert_eq!(strip_breaks(&with_breaks("a &b"), StripOptions::ALL), chars("a b"));
    assert_eq!(strip_breaks(&with_breaks("a& b"), StripOptions::ALL), chars("a b"));
    assert_eq!(strip_breaks(&with_breaks("a & b"), StripOptions::ALL), chars("a  b"));
}

#[test]
fn consecutive_breaks_collapse_to_one_space() {
    // The first break becomes a space; the rest see it behind them.
    assert_eq!(strip_breaks(&with_breaks("a&&&b"), StripOptions::ALL), chars("a b"));
}

#[test]
fn only_selected_kinds_are_stripped() {
    let lines_only = StripOptions {
        lines: true,
        boxes: false,
    };
    assert_eq!(
        strip_breaks(&with_breaks("a&b^c"), lines_only),
        with_breaks("a b^c")
    );

    let boxes_only = StripOptions {
        lines: false,
        boxes: true,
    };
    assert_eq!(
        strip_breaks(&with_breaks("a&b^c"), boxes_only),
        with_breaks("a&b c")
    );
}

#[test]
fn breaks_at_sequence_boundaries() {
    // No previous code at the start, no next code at the end.
    assert_eq!(strip_breaks(&with_breaks("&a&"), StripOptions::ALL), chars(" a "));
    assert_eq!(strip_breaks(&with_breaks("& a"), StripOptions::ALL), chars(" a"));
    assert_eq!(strip_breaks(&with_breaks("a &"), StripOptions::ALL), chars("a "));
}

#[test]
fn lone_break() {
    assert_eq!(strip_breaks(&[LB], StripOptions::ALL), chars(" "));
    assert!(strip_breaks(&[], StripOptions::ALL).is_empty());
}

#[test]
fn is_empty() {
    assert!(StripOptions::NONE.is_empty());
    assert!(StripOptions::default().is_empty());
    assert!(!StripOptions::ALL.is_empty());
}
