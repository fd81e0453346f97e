//! Wrap configuration.
//!
//! Geometry of the in-game text box plus the normalization switches for
//! the input text. One value of this type fully determines a wrap; there
//! is no global locale or settings state.

use tbx_ir::Locale;
use tbx_lexer::{NormalizeOptions, StripOptions};

pub use crate::width::NORMAL_LINE_WIDTH;

/// Usable line width in a box that shows an item icon.
pub const ICON_LINE_WIDTH: u64 = 1_441_440;

/// Lines that fit in one box; further lines bleed past its bottom edge.
pub const LINES_PER_BOX: usize = 4;

/// Characters one box can hold before the engine's buffer overflows.
///
/// Overflow first shows up as artifacts in the lower part of the box and
/// eventually leaves the box impossible to close.
pub const MAX_CHARACTERS_PER_BOX: usize = 200;

/// Configuration for a wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapConfig {
    /// Target engine build.
    pub locale: Locale,

    /// Line budget in width units.
    /// Defaults to [`NORMAL_LINE_WIDTH`].
    pub line_width: u64,

    /// Line budget for boxes containing an icon.
    /// Defaults to [`ICON_LINE_WIDTH`].
    pub icon_line_width: u64,

    /// Lines per box before a new box is started.
    /// Defaults to [`LINES_PER_BOX`].
    pub lines_per_box: usize,

    /// Character ceiling used by [`WrappedText::overfull_boxes`](crate::WrappedText::overfull_boxes)
    /// audits. The wrap itself never truncates.
    pub max_characters_per_box: usize,

    /// How raw text is turned into text codes.
    pub normalize: NormalizeOptions,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl WrapConfig {
    /// Engine defaults for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            line_width: NORMAL_LINE_WIDTH,
            icon_line_width: ICON_LINE_WIDTH,
            lines_per_box: LINES_PER_BOX,
            max_characters_per_box: MAX_CHARACTERS_PER_BOX,
            normalize: NormalizeOptions::default(),
        }
    }

    /// Override the line budget.
    #[must_use]
    pub fn with_line_width(mut self, line_width: u64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Override the line budget used in icon boxes.
    #[must_use]
    pub fn with_icon_line_width(mut self, icon_line_width: u64) -> Self {
        self.icon_line_width = icon_line_width;
        self
    }

    /// Override the number of lines per box. Clamped to at least one.
    #[must_use]
    pub fn with_lines_per_box(mut self, lines_per_box: usize) -> Self {
        self.lines_per_box = lines_per_box.max(1);
        self
    }

    /// Dissolve line breaks already present in the input.
    #[must_use]
    pub fn strip_existing_lines(mut self) -> Self {
        self.normalize.strip.lines = true;
        self
    }

    /// Dissolve box breaks already present in the input.
    #[must_use]
    pub fn strip_existing_boxes(mut self) -> Self {
        self.normalize.strip.boxes = true;
        self
    }

    /// Treat `&`, `^`, `@` and `#` as literal glyphs.
    #[must_use]
    pub fn without_stand_ins(mut self) -> Self {
        self.normalize.substitute_stand_ins = false;
        self
    }

    /// Breaks that will be stripped.
    #[inline]
    pub fn strip(&self) -> StripOptions {
        self.normalize.strip
    }

    /// Budget for a box, given whether it contains an icon.
    #[inline]
    pub fn budget(&self, has_icon: bool) -> u64 {
        if has_icon {
            self.icon_line_width
        } else {
            self.line_width
        }
    }
}
