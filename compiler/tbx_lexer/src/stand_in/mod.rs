//! Stand-in symbols for control codes.
//!
//! Hand-written message text uses printable symbols for the four controls
//! authors need most. The symbol set is shared by both locales; the native
//! code each symbol expands to is not.
//!
//! | Symbol | Control | English | Japanese |
//! |--------|---------|---------|----------|
//! | `&` | line-break | `\x01` | `\u{000A}` |
//! | `^` | box-break | `\x04` | `\u{81A5}` |
//! | `@` | name | `\x0F` | `\u{874F}` |
//! | `#` | color | `\x05\x00` | `\u{000B}\u{0000}` |

use std::borrow::Cow;

use tbx_ir::{Control, ControlKind, Locale};

/// A stand-in symbol and the control it expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandIn {
    pub symbol: char,
    pub control: Control,
}

impl StandIn {
    /// Native replacement text in the given locale.
    pub fn replacement(&self, locale: Locale) -> String {
        let mut out = String::new();
        self.control.render(locale, &mut out);
        out
    }
}

pub static STAND_INS: [StandIn; 4] = [
    StandIn {
        symbol: '&',
        control: Control::bare(ControlKind::LineBreak),
    },
    StandIn {
        symbol: '^',
        control: Control::bare(ControlKind::BoxBreak),
    },
    StandIn {
        symbol: '@',
        control: Control::bare(ControlKind::Name),
    },
    StandIn {
        symbol: '#',
        control: Control::new(ControlKind::Color, 0),
    },
];

/// The stand-in for `symbol`, if it is one.
#[inline]
pub fn stand_in_for(symbol: char) -> Option<&'static StandIn> {
    STAND_INS.iter().find(|stand_in| stand_in.symbol == symbol)
}

/// Replace every stand-in symbol with its native control code.
///
/// Borrows `text` unchanged when it contains no stand-ins.
pub fn substitute_stand_ins(text: &str, locale: Locale) -> Cow<'_, str> {
    if !text.contains(|c: char| stand_in_for(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match stand_in_for(c) {
            Some(stand_in) => stand_in.control.render(locale, &mut out),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
