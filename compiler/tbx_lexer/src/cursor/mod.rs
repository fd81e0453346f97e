//! Forward-only cursor over message text.
//!
//! Message text is scanned one scalar value at a time: in the English
//! build every code unit is a byte below U+0100, in the Japanese build every
//! code unit is a 16-bit value, and in both cases one `char` is one unit.

use std::str::Chars;

pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor {
            chars: text.chars(),
        }
    }

    /// Consume and return the next unit.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Consume up to `units` payload units, folding them big-endian.
    ///
    /// Each unit is masked to `mask`. Stops early at end of input; the
    /// units that exist are still folded.
    pub(crate) fn fold_units(&mut self, units: u32, mask: u32) -> u32 {
        let bits = mask.count_ones();
        let mut data: u32 = 0;
        for _ in 0..units {
            let Some(c) = self.bump() else {
                break;
            };
            data = data.checked_shl(bits).unwrap_or(0) | (u32::from(c) & mask);
        }
        data
    }
}
