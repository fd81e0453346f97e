use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_english() {
    assert_eq!(Locale::default(), Locale::English);
}

#[test]
fn parse_accepts_long_and_short_names() {
    assert_eq!("english".parse::<Locale>(), Ok(Locale::English));
    assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
    assert_eq!("japanese".parse::<Locale>(), Ok(Locale::Japanese));
    assert_eq!(" jp ".parse::<Locale>(), Ok(Locale::Japanese));
    assert_eq!("ja".parse::<Locale>(), Ok(Locale::Japanese));
}

#[test]
fn parse_rejects_unknown_name() {
    let err = "german".parse::<Locale>().unwrap_err();
    assert_eq!(err, UnknownLocale("german".to_owned()));
    assert_eq!(
        err.to_string(),
        "unknown locale `german` (expected `english` or `japanese`)"
    );
}

#[test]
fn display_round_trips_through_from_str() {
    for locale in [Locale::English, Locale::Japanese] {
        assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
    }
}

#[test]
fn unit_masks() {
    assert_eq!(Locale::English.unit_mask(), 0xFF);
    assert_eq!(Locale::Japanese.unit_mask(), 0xFFFF);
}

#[test]
fn text_end_markers() {
    assert_eq!(Locale::English.text_end(), "\u{02}");
    assert_eq!(Locale::Japanese.text_end(), "\u{8170}");
}
