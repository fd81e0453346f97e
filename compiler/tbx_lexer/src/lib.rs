//! Text Box Lexer
//!
//! Turns raw message text into the flat [`TextCode`] stream the wrap engine
//! consumes. Three stages, each usable on its own:
//!
//! 1. [`substitute_stand_ins`]: replace the human-friendly stand-in symbols
//!    (`&`, `^`, `@`, `#`) with native control codes
//! 2. [`parse_control_codes`]: split native text into glyphs and controls
//! 3. [`strip_breaks`]: optionally dissolve existing line/box breaks into
//!    plain spaces so text can be re-flowed from scratch
//!
//! [`normalize`] runs the whole pipeline.

mod cursor;
mod parser;
mod stand_in;
mod strip;

use std::borrow::Cow;

pub use parser::parse_control_codes;
pub use stand_in::{stand_in_for, substitute_stand_ins, StandIn, STAND_INS};
pub use strip::{strip_breaks, StripOptions};
use tbx_ir::{Locale, TextCode};
use tracing::trace;

/// Options for [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Existing breaks to dissolve.
    pub strip: StripOptions,
    /// Whether stand-in symbols are replaced before parsing.
    pub substitute_stand_ins: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip: StripOptions::NONE,
            substitute_stand_ins: true,
        }
    }
}

/// Tokenize raw message text.
///
/// Never fails: empty input yields an empty stream, and text without any
/// control codes yields one `Char` per scalar value.
pub fn normalize(text: &str, locale: Locale, options: &NormalizeOptions) -> Vec<TextCode> {
    let text = if options.substitute_stand_ins {
        substitute_stand_ins(text, locale)
    } else {
        Cow::Borrowed(text)
    };

    let codes = parse_control_codes(&text, locale);
    if options.strip.is_empty() {
        return codes;
    }

    let stripped = strip_breaks(&codes, options.strip);
    trace!(
        before = codes.len(),
        after = stripped.len(),
        "stripped existing breaks"
    );
    stripped
}
