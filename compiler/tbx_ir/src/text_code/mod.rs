//! Text codes: the atomic unit of message text.
//!
//! A message is a flat sequence of text codes. Literal glyphs are stored as
//! `char`s; control operations carry their kind and folded payload. The
//! native form of either is recovered with [`TextCode::render`].

use std::fmt;

use crate::{ControlKind, Locale};

/// A control operation with its payload.
///
/// `data` holds the payload units folded big-endian. Controls without a
/// payload carry `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Control {
    pub kind: ControlKind,
    pub data: u32,
}

impl Control {
    #[inline]
    pub const fn new(kind: ControlKind, data: u32) -> Self {
        Control { kind, data }
    }

    /// A control without payload.
    #[inline]
    pub const fn bare(kind: ControlKind) -> Self {
        Control { kind, data: 0 }
    }

    /// Append the native representation: the control code unit followed by
    /// its payload units, most significant first.
    pub fn render(self, locale: Locale, out: &mut String) {
        out.push(unit_char(u32::from(self.kind.code(locale))));
        let units = self.kind.payload_units(locale);
        let bits = locale.unit_bits();
        for i in (0..units).rev() {
            let unit = self.data.checked_shr(bits * i).unwrap_or(0) & locale.unit_mask();
            out.push(unit_char(unit));
        }
    }
}

/// One parsed unit of message text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCode {
    /// A literal glyph.
    Char(char),
    /// A control operation.
    Control(Control),
}

impl TextCode {
    /// The plain space, the only word separator.
    pub const SPACE: TextCode = TextCode::Char(' ');

    /// A payload-free control.
    #[inline]
    pub const fn control(kind: ControlKind) -> Self {
        TextCode::Control(Control::bare(kind))
    }

    /// The control kind, if this is a control.
    #[inline]
    pub const fn kind(&self) -> Option<ControlKind> {
        match self {
            TextCode::Control(control) => Some(control.kind),
            TextCode::Char(_) => None,
        }
    }

    #[inline]
    pub fn is(&self, kind: ControlKind) -> bool {
        self.kind() == Some(kind)
    }

    #[inline]
    pub fn is_space(&self) -> bool {
        *self == TextCode::SPACE
    }

    /// Whether this is a line break or a box break.
    #[inline]
    pub fn is_break(&self) -> bool {
        self.kind().is_some_and(ControlKind::is_break)
    }

    /// Integer code of this unit: the scalar value of a glyph, or the
    /// native control code.
    #[inline]
    pub fn native_code(&self, locale: Locale) -> u32 {
        match self {
            TextCode::Char(c) => u32::from(*c),
            TextCode::Control(control) => u32::from(control.kind.code(locale)),
        }
    }

    /// Append the native representation of this unit to `out`.
    pub fn render(&self, locale: Locale, out: &mut String) {
        match self {
            TextCode::Char(c) => out.push(*c),
            TextCode::Control(control) => control.render(locale, out),
        }
    }

    /// Native representation as a fresh string.
    pub fn to_native(&self, locale: Locale) -> String {
        let mut out = String::new();
        self.render(locale, &mut out);
        out
    }
}

impl fmt::Debug for TextCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextCode::Char(c) => write!(f, "{c:?}"),
            TextCode::Control(Control { kind, data: 0 }) => write!(f, "<{}>", kind.name()),
            TextCode::Control(Control { kind, data }) => {
                write!(f, "<{} {data:#x}>", kind.name())
            }
        }
    }
}

impl From<char> for TextCode {
    fn from(c: char) -> Self {
        TextCode::Char(c)
    }
}

impl From<Control> for TextCode {
    fn from(control: Control) -> Self {
        TextCode::Control(control)
    }
}

/// A code unit as a `char`. Units in the surrogate range cannot be
/// represented and render as U+FFFD.
#[inline]
fn unit_char(unit: u32) -> char {
    char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}
