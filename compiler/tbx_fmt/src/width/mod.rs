//! Glyph Width Tables
//!
//! Widths are fixed-point units chosen so that a full text box line is
//! exactly [`NORMAL_LINE_WIDTH`] units: the least common multiple of every
//! glyphs-per-line count the engine can produce. A glyph that fits `n`
//! times on a line is `NORMAL_LINE_WIDTH / n` units wide, always an exact
//! integer, so line widths are summed without rounding.
//!
//! # Lookup Order
//!
//! 1. Exact table (per-glyph widths, plus shared full-width glyphs)
//! 2. Below the control threshold: the composite table, summing the widths
//!    of the glyphs a counter-style control displays; otherwise the
//!    locale's unmapped-control width
//! 3. At or above the threshold: the space width. Most glyphs are no wider
//!    than a space, so unknown text packs conservatively.

mod english;
mod japanese;


use tbx_ir::{Control, ControlKind, Locale, TextCode};

/// Width of a full text box line.
pub const NORMAL_LINE_WIDTH: u64 = 1_801_800;

/// Width of a glyph that fits `count` times on a full line.
#[inline]
pub const fn per_line(count: u64) -> u64 {
    NORMAL_LINE_WIDTH / count
}

/// Width of an unmapped code below the control threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unmapped {
    Zero,
    Space,
}

/// Per-locale glyph width table.
#[derive(Debug)]
pub struct WidthTable {
    locale: Locale,
    glyphs: &'static [(char, u64)],
    full_width: &'static [char],
    full_width_units: u64,
    composites: &'static [(u32, &'static str)],
    control_threshold: u32,
    unmapped_control: Unmapped,
    space: u64,
}

static ENGLISH: WidthTable = WidthTable {
    locale: Locale::English,
    glyphs: english::GLYPHS,
    full_width: &[],
    full_width_units: 0,
    composites: english::COMPOSITES,
    control_threshold: 0x20,
    unmapped_control: Unmapped::Zero,
    space: per_line(35),
};

static JAPANESE: WidthTable = WidthTable {
    locale: Locale::Japanese,
    glyphs: japanese::GLYPHS,
    full_width: japanese::FULL_WIDTH,
    full_width_units: japanese::FULL_WIDTH_UNITS,
    composites: japanese::COMPOSITES,
    control_threshold: 0x87A0,
    unmapped_control: Unmapped::Space,
    space: per_line(35),
};

impl WidthTable {
    /// The table for `locale`.
    pub fn for_locale(locale: Locale) -> &'static WidthTable {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Japanese => &JAPANESE,
        }
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Width of the inter-word space.
    #[inline]
    pub fn space_width(&self) -> u64 {
        self.space
    }

    /// Width of the unit with integer code `code`.
    pub fn unit_width(&self, code: u32) -> u64 {
        if let Some(width) = self.exact(code) {
            return width;
        }
        if code < self.control_threshold {
            return self.composite(code).unwrap_or(match self.unmapped_control {
                Unmapped::Zero => 0,
                Unmapped::Space => self.space,
            });
        }
        self.space
    }

    /// Width of a single text code.
    ///
    /// A shift control is as wide as its payload says; everything else is
    /// looked up by its native code.
    pub fn code_width(&self, code: &TextCode) -> u64 {
        match code {
            // Both locales: the Japanese shift is not measured as a space.
            TextCode::Control(Control {
                kind: ControlKind::Shift,
                data,
            }) => u64::from(*data),
            _ => self.unit_width(code.native_code(self.locale)),
        }
    }

    /// Width of a word: the sum of its codes.
    pub fn word_width(&self, codes: &[TextCode]) -> u64 {
        codes.iter().map(|code| self.code_width(code)).sum()
    }

    /// Width of words laid out on one line, single-spaced.
    pub fn line_width<'a, I>(&self, words: I) -> u64
    where
        I: IntoIterator<Item = &'a [TextCode]>,
    {
        let mut count = 0u64;
        let mut width = 0u64;
        for word in words {
            count += 1;
            width += self.word_width(word);
        }
        width + self.space * count.saturating_sub(1)
    }

    fn exact(&self, code: u32) -> Option<u64> {
        let c = char::from_u32(code)?;
        if let Ok(index) = self.glyphs.binary_search_by_key(&c, |&(glyph, _)| glyph) {
            return self.glyphs.get(index).map(|&(_, width)| width);
        }
        self.full_width
            .binary_search(&c)
            .is_ok()
            .then_some(self.full_width_units)
    }

    fn composite(&self, code: u32) -> Option<u64> {
        let index = self
            .composites
            .binary_search_by_key(&code, |&(composite, _)| composite)
            .ok()?;
        let (_, shown) = self.composites.get(index)?;
        Some(
            shown
                .chars()
                .map(|glyph| self.exact(u32::from(glyph)).unwrap_or(self.space))
                .sum(),
        )
    }
}
