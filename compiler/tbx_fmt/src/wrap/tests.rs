use super::*;
use crate::config::WrapConfig;
use crate::width::WidthTable;
use tbx_lexer::{normalize, NormalizeOptions};

fn codes(text: &str) -> Vec<TextCode> {
    normalize(text, Locale::English, &NormalizeOptions::default())
}

fn native(word: &Word) -> String {
    word.codes()
        .iter()
        .map(|code| code.to_native(Locale::English))
        .collect()
}

/// Boxes as lists of lines, each line rendered single-spaced.
fn layout(text: &str, config: &WrapConfig) -> Vec<Vec<String>> {
    let codes = codes(text);
    let table = WidthTable::for_locale(config.locale);
    let mut out = Vec::new();
    for source in split_boxes(&codes) {
        pack_box(group_words(source), table, config, &mut out);
    }
    out.iter()
        .map(|text_box| {
            text_box
                .lines
                .iter()
                .map(|line| line.words.iter().map(native).collect::<Vec<_>>().join(" "))
                .collect()
        })
        .collect()
}

/// Room for two `W`s but not three.
fn narrow() -> WrapConfig {
    WrapConfig::default().with_line_width(300_000)
}

mod splitting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn box_break_stays_with_its_box() {
        let codes = codes("ab^c");
        let boxes = split_boxes(&codes);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].len(), 3);
        assert!(boxes[0][2].is(ControlKind::BoxBreak));
        assert_eq!(boxes[1], &[TextCode::Char('c')]);
    }

    #[test]
    fn trailing_remainder_is_always_pushed() {
        let codes = codes("a^");
        let boxes = split_boxes(&codes);
        assert_eq!(boxes.len(), 2);
        assert!(boxes[1].is_empty());

        assert_eq!(split_boxes(&[]), vec![&[] as &[TextCode]]);
    }
}

mod grouping {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<String> {
        group_words(&codes(text)).words.iter().map(native).collect()
    }

    #[test]
    fn spaces_delimit_and_vanish() {
        assert_eq!(words("Hello  World! "), vec!["Hello", "World!"]);
        assert_eq!(words(" a"), vec!["a"]);
    }

    #[test]
    fn breaks_are_words_of_their_own() {
        let grouped = group_words(&codes("a&b^"));
        let breaks: Vec<bool> = grouped.words.iter().map(Word::is_break).collect();
        assert_eq!(breaks, vec![false, true, false, true]);
        assert!(grouped.words[3].is_box_break());
        assert!(!grouped.words[1].is_box_break());
    }

    #[test]
    fn controls_stay_inside_words() {
        assert_eq!(words("a#b# c"), vec!["a\u{05}\u{00}b\u{05}\u{00}", "c"]);
    }

    #[test]
    fn last_icon_wins() {
        let grouped = group_words(&codes("\u{13}\u{01}a \u{13}\u{2A}b"));
        let icon = grouped.icon.map(|control| control.data);
        assert_eq!(icon, Some(0x2A));

        assert!(group_words(&codes("plain words")).icon.is_none());
    }

    #[test]
    fn empty_box_has_no_words() {
        assert!(group_words(&[]).words.is_empty());
        assert!(group_words(&codes("   ")).words.is_empty());
    }
}

mod packing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn greedy_fill() {
        assert_eq!(layout("W W W W W", &narrow()), vec![vec!["W W", "W W", "W"]]);
    }

    #[test]
    fn full_box_spills_into_next() {
        let config = narrow().with_lines_per_box(2);
        assert_eq!(
            layout("W W W W W", &config),
            vec![vec!["W W", "W W"], vec!["W"]]
        );
    }

    #[test]
    fn overlong_word_sits_alone() {
        assert_eq!(
            layout("W WWWW W", &narrow()),
            vec![vec!["W", "WWWW", "W"]]
        );
    }

    #[test]
    fn consecutive_breaks_leave_empty_lines() {
        assert_eq!(layout("W&&W", &narrow()), vec![vec!["W", "", "W"]]);
    }

    #[test]
    fn leading_break_is_dropped() {
        assert_eq!(layout("&W", &narrow()), vec![vec!["W"]]);
    }

    #[test]
    fn break_run_can_fill_a_box() {
        assert_eq!(
            layout("W&&&&W", &narrow()),
            vec![vec!["W", "", "", ""], vec!["W"]]
        );
    }

    #[test]
    fn box_break_closes_box() {
        assert_eq!(layout("W^W", &narrow()), vec![vec!["W"], vec!["W"]]);
    }

    #[test]
    fn wordless_source_boxes_vanish() {
        // A lone box break is still a word, so it leaves an empty box behind.
        assert_eq!(layout("^W^", &narrow()), vec![vec![], vec!["W"]]);
        assert!(layout("", &narrow()).is_empty());
    }

    #[test]
    fn icon_narrows_budget() {
        // "W W" fits the normal budget but not the icon one.
        let config = WrapConfig::default().with_icon_line_width(200_000);
        assert_eq!(
            layout("\u{13}\u{2A}W W", &config),
            vec![vec!["\u{13}\u{2A}W", "W"]]
        );
        assert_eq!(layout("W W", &config), vec![vec!["W W"]]);
    }

    #[test]
    fn icon_follows_into_spill_boxes() {
        let config = narrow()
            .with_icon_line_width(300_000)
            .with_lines_per_box(1);
        assert_eq!(
            layout("\u{13}\u{2A}W W W", &config),
            vec![vec!["\u{13}\u{2A}W W"], vec!["\u{13}\u{2A}W"]]
        );
    }

    #[test]
    fn icon_is_not_injected_into_lineless_box() {
        let config = narrow().with_lines_per_box(1);
        // The last break closes a second physical box with no lines in it.
        let boxes = layout("\u{13}\u{2A}W&&", &config);
        assert_eq!(boxes, vec![vec!["\u{13}\u{2A}W"], vec![]]);
    }
}

mod wrapped {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wrapped(text: &str, config: &WrapConfig) -> WrappedText {
        let codes = codes(text);
        let mut boxes = Vec::new();
        for source in split_boxes(&codes) {
            pack_box(
                group_words(source),
                WidthTable::for_locale(config.locale),
                config,
                &mut boxes,
            );
        }
        WrappedText { boxes }
    }

    #[test]
    fn render_joins_with_native_separators() {
        let text = wrapped("W W W^W", &narrow());
        assert_eq!(text.render(Locale::English), "W W\u{01}W\u{04}W");
        assert_eq!(text.line_count(), 3);
    }

    #[test]
    fn char_count_includes_separators() {
        let text = wrapped("W W W", &narrow());
        // "W W" + line break + "W"
        assert_eq!(text.boxes[0].char_count(Locale::English), 5);
    }

    #[test]
    fn overfull_boxes_are_reported() {
        let text = wrapped("WWWWWW^W", &narrow());
        let tight = WrapConfig {
            max_characters_per_box: 5,
            ..narrow()
        };
        assert_eq!(text.overfull_boxes(&tight), vec![0]);
        assert!(text.overfull_boxes(&narrow()).is_empty());
    }

    #[test]
    fn line_width_and_icon_queries() {
        let text = wrapped("\u{13}\u{2A}W W", &WrapConfig::default());
        let line = &text.boxes[0].lines[0];
        assert_eq!(line.width(Locale::English), 100_100 * 2 + 51_480);
        assert!(!line.is_empty());
        assert!(text.boxes[0].has_icon());
        assert!(!wrapped("W", &narrow()).boxes[0].has_icon());
    }
}
