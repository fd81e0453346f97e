//! Golden tests for the line-wrap engine.
//!
//! Each case pairs stand-in message text with the exact native text the
//! engine must produce.

use tbx_fmt::{line_wrap, wrap_codes, WrapConfig};
use tbx_ir::Locale;
use tbx_lexer::{normalize, NormalizeOptions};

fn english(text: &str) -> String {
    line_wrap(text, &WrapConfig::default())
}

fn japanese(text: &str) -> String {
    line_wrap(text, &WrapConfig::for_locale(Locale::Japanese))
}

/// Ten kana: a little under half a line.
const KANA: &str = "ああああああああああ";

mod english_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_wrap() {
        assert_eq!(
            english("Hello World! Hello World! Hello World!"),
            "Hello World! Hello World! Hello\u{01}World!"
        );
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(english("Hello World!"), "Hello World!");
    }

    #[test]
    fn forced_line_break() {
        assert_eq!(
            english("Hello World! Hello World!&Hello World! Hello World! Hello World!"),
            "Hello World! Hello World!\u{01}Hello World! Hello World! Hello\u{01}World!"
        );
    }

    #[test]
    fn forced_box_break() {
        assert_eq!(
            english("Hello World! Hello World!^Hello World! Hello World! Hello World!"),
            "Hello World! Hello World!\u{04}Hello World! Hello World! Hello\u{01}World!"
        );
    }

    #[test]
    fn color_controls_are_zero_width() {
        assert_eq!(
            english("Hello World! #Hello# World! Hello World!"),
            "Hello World! \u{05}\u{00}Hello\u{05}\u{00} World! Hello\u{01}World!"
        );
    }

    #[test]
    fn player_name_is_measured_at_full_length() {
        assert_eq!(
            english("Hello @! Hello World! Hello World!"),
            "Hello \u{0F}! Hello World!\u{01}Hello World!"
        );
    }

    #[test]
    fn runs_of_line_breaks_are_kept() {
        assert_eq!(
            english("Hello World!&&&Hello World!"),
            "Hello World!\u{01}\u{01}\u{01}Hello World!"
        );
    }

    #[test]
    fn spaces_around_breaks_are_absorbed() {
        assert_eq!(
            english("Hello World! & Hello World!"),
            "Hello World!\u{01}Hello World!"
        );
    }

    #[test]
    fn long_words_sit_alone() {
        assert_eq!(
            english("Hello World! WWWWWWWWWWWWWWWWWWWW Hello World!"),
            "Hello World!\u{01}WWWWWWWWWWWWWWWWWWWW\u{01}Hello World!"
        );
    }

    #[test]
    fn fifth_line_spills_into_new_box() {
        let config = WrapConfig::default();
        let text = "Hello World! Hello World! Hello World!";
        let codes = normalize(
            &[text; 4].join(" "),
            Locale::English,
            &NormalizeOptions::default(),
        );
        let wrapped = wrap_codes(&codes, &config);
        assert_eq!(wrapped.boxes.len(), 2);
        assert_eq!(wrapped.boxes[0].lines.len(), 4);
        assert!(wrapped.boxes[1].lines.len() <= 4);
    }

    #[test]
    fn breaks_at_the_edges_are_dropped() {
        assert_eq!(english("&Hello World!&"), "Hello World!");
        assert_eq!(english("Hello World!^"), "Hello World!");
    }

    #[test]
    fn leading_box_break_leaves_empty_box() {
        assert_eq!(english("^Hello World!"), "\u{04}Hello World!");
    }

    #[test]
    fn empty_input() {
        assert_eq!(english(""), "");
    }
}

mod reflow {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_lines_then_rewrap() {
        let config = WrapConfig::default().strip_existing_lines();
        assert_eq!(
            line_wrap("Hello World!&Hello World!&Hello World!", &config),
            "Hello World! Hello World! Hello\u{01}World!"
        );
    }

    #[test]
    fn stripping_next_to_a_space_does_not_double_it() {
        let config = WrapConfig::default().strip_existing_lines();
        assert_eq!(
            line_wrap("Hello World! & Hello World!", &config),
            "Hello World! Hello World!"
        );
    }

    #[test]
    fn strip_boxes_keeps_lines() {
        let config = WrapConfig::default().strip_existing_boxes();
        assert_eq!(
            line_wrap("Hello^World!&Hello", &config),
            "Hello World!\u{01}Hello"
        );
    }

    #[test]
    fn rewrap_of_native_text() {
        let config = WrapConfig::default()
            .strip_existing_lines()
            .strip_existing_boxes()
            .without_stand_ins();
        let native = "Hello World!\u{01}Hello World!\u{04}Hello World!";
        assert_eq!(
            line_wrap(native, &config),
            "Hello World! Hello World! Hello\u{01}World!"
        );
    }
}

mod icons {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn icon_narrows_every_line_of_its_box() {
        // "Hello World! Hello World!" plus the next "Hello" fits a normal line.
        let text = "\u{13}\u{2A}Hello World! Hello World! Hello World!";
        assert_eq!(
            english(text),
            "\u{13}\u{2A}Hello World! Hello World!\u{01}Hello World!"
        );
    }

    #[test]
    fn icon_only_affects_its_own_box() {
        let text = "\u{13}\u{2A}Hi^Hello World! Hello World! Hello World!";
        assert_eq!(
            english(text),
            "\u{13}\u{2A}Hi\u{04}Hello World! Hello World! Hello\u{01}World!"
        );
    }
}

mod japanese_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_between_ascii_spaces() {
        let text = [KANA; 3].join(" ");
        assert_eq!(japanese(&text), format!("{KANA} {KANA}\u{0A}{KANA}"));
    }

    #[test]
    fn unspaced_text_is_one_word() {
        let text = KANA.repeat(3);
        assert_eq!(japanese(&text), text);
    }

    #[test]
    fn stand_ins_become_native_breaks() {
        assert_eq!(
            japanese(&format!("{KANA}&{KANA}^{KANA}")),
            format!("{KANA}\u{0A}{KANA}\u{81A5}{KANA}")
        );
    }

    #[test]
    fn icon_narrows_japanese_lines() {
        let text = format!("\u{819A}\u{0001}{KANA} {KANA}");
        assert_eq!(
            japanese(&text),
            format!("\u{819A}\u{0001}{KANA}\u{0A}{KANA}")
        );
        assert_eq!(japanese(&format!("{KANA} {KANA}")), format!("{KANA} {KANA}"));
    }

    #[test]
    fn strip_native_line_breaks() {
        let config = WrapConfig::for_locale(Locale::Japanese).strip_existing_lines();
        assert_eq!(
            line_wrap(&format!("{KANA}\u{0A}{KANA}"), &config),
            format!("{KANA} {KANA}")
        );
    }
}
