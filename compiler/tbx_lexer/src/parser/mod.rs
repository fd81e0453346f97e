//! Control code parser.
//!
//! Splits native message text into [`TextCode`]s. A unit whose value is a
//! control code of the active locale becomes a [`Control`] and swallows its
//! payload units; anything else is a literal glyph. Parsing stops after the
//! end-of-message control, which is kept.

use tbx_ir::{Control, ControlKind, Locale, TextCode};
use tracing::trace;

use crate::cursor::Cursor;

/// Parse native message text into text codes.
pub fn parse_control_codes(text: &str, locale: Locale) -> Vec<TextCode> {
    let mut cursor = Cursor::new(text);
    let mut codes = Vec::with_capacity(text.len());

    while let Some(c) = cursor.bump() {
        let Some(kind) = ControlKind::from_code(u32::from(c), locale) else {
            codes.push(TextCode::Char(c));
            continue;
        };

        let data = cursor.fold_units(kind.payload_units(locale), locale.unit_mask());
        codes.push(TextCode::Control(Control::new(kind, data)));

        if kind == ControlKind::End {
            if !cursor.is_eof() {
                trace!(%locale, "ignoring text after end of message");
            }
            break;
        }
    }

    trace!(%locale, count = codes.len(), "parsed text codes");
    codes
}
