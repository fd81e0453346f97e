//! English glyph widths.
//!
//! Measured by filling a full line of a text box with a single glyph and
//! counting how many fit, so each width is the line budget divided by that
//! count. The engine does no kerning; if it did, it would only pack text
//! tighter than these numbers predict.

use super::per_line;

/// Glyphs and counter-style controls, sorted by code.
pub(super) const GLYPHS: &[(char, u64)] = &[
    ('\u{0F}', 655200), // name
    ('\u{16}', 292215), // marathon time
    ('\u{17}', 292215), // race time
    ('\u{18}', 300300), // points
    ('\u{19}', 145860), // skulltula count
    ('\u{1D}', 85800), // fish weight
    ('\u{1E}', 300300), // high score
    ('\u{1F}', 265980), // time
    (' ', per_line(35)),
    ('!', per_line(35)),
    ('"', per_line(52)),
    ('$', per_line(35)),
    ('\'', per_line(104)),
    ('(', per_line(42)),
    (')', per_line(42)),
    (',', per_line(70)),
    ('-', per_line(52)),
    ('.', per_line(70)),
    ('/', per_line(35)),
    ('0', per_line(30)),
    ('1', per_line(70)),
    ('2', per_line(35)),
    ('3', per_line(35)),
    ('4', per_line(30)),
    ('5', per_line(35)),
    ('6', per_line(35)),
    ('7', per_line(35)),
    ('8', per_line(35)),
    ('9', per_line(35)),
    ('?', per_line(25)),
    ('A', per_line(22)),
    ('B', per_line(35)),
    ('C', per_line(25)),
    ('D', per_line(25)),
    ('E', per_line(35)),
    ('F', per_line(35)),
    ('G', per_line(22)),
    ('H', per_line(30)),
    ('I', per_line(70)),
    ('J', per_line(35)),
    ('K', per_line(30)),
    ('L', per_line(35)),
    ('M', per_line(22)),
    ('N', per_line(25)),
    ('O', per_line(22)),
    ('P', per_line(35)),
    ('Q', per_line(22)),
    ('R', per_line(30)),
    ('S', per_line(30)),
    ('T', per_line(35)),
    ('U', per_line(30)),
    ('V', per_line(25)),
    ('W', per_line(18)),
    ('X', per_line(25)),
    ('Y', per_line(30)),
    ('Z', per_line(30)),
    ('_', per_line(35)),
    ('a', per_line(35)),
    ('b', per_line(35)),
    ('c', per_line(35)),
    ('d', per_line(35)),
    ('e', per_line(35)),
    ('f', per_line(52)),
    ('g', per_line(35)),
    ('h', per_line(35)),
    ('i', per_line(70)),
    ('j', per_line(52)),
    ('k', per_line(35)),
    ('l', per_line(70)),
    ('m', per_line(22)),
    ('n', per_line(35)),
    ('o', per_line(35)),
    ('p', per_line(35)),
    ('q', per_line(35)),
    ('r', per_line(42)),
    ('s', per_line(35)),
    ('t', per_line(42)),
    ('u', per_line(35)),
    ('v', per_line(35)),
    ('w', per_line(22)),
    ('x', per_line(35)),
    ('y', per_line(35)),
    ('z', per_line(35)),
];

/// Counter-style controls and the glyphs they display, sorted by code.
///
/// Consulted only for controls missing from [`GLYPHS`].
pub(super) const COMPOSITES: &[(u32, &str)] = &[
    (0x0F, "00000000"),
    (0x16, "00'00\""),
    (0x17, "00'00\""),
    (0x18, "00000"),
    (0x19, "100"),
    (0x1D, "00"),
    (0x1E, "00000"),
    (0x1F, "00'00\""),
];
