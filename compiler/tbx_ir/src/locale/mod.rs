//! Target engine locale.
//!
//! The English and Japanese builds of the engine disagree on nearly every
//! low-level detail of message text: control code values, the width of a
//! code unit, the glyph width table and the message terminator.

use std::fmt;
use std::str::FromStr;

/// The engine build a message is laid out for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Single-byte control codes, byte-sized payload units.
    #[default]
    English,
    /// Two-byte control codes, 16-bit payload units.
    Japanese,
}

/// A locale name that is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale `{0}` (expected `english` or `japanese`)")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Locale::English => "english",
            Locale::Japanese => "japanese",
        }
    }

    /// Number of bits held by one payload code unit.
    pub const fn unit_bits(self) -> u32 {
        match self {
            Locale::English => 8,
            Locale::Japanese => 16,
        }
    }

    /// Mask selecting a single payload code unit.
    #[inline]
    pub const fn unit_mask(self) -> u32 {
        (1 << self.unit_bits()) - 1
    }

    /// Message terminator expected by downstream consumers.
    ///
    /// The reflow engine never emits it; callers append it when they
    /// assemble a complete message.
    pub const fn text_end(self) -> &'static str {
        match self {
            Locale::English => "\u{02}",
            Locale::Japanese => "\u{8170}",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Locale::English),
            "japanese" | "jp" | "ja" => Ok(Locale::Japanese),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests;
