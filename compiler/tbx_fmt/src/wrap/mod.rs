//! Word-Wrap Engine
//!
//! Lays a text code stream out into boxes of lines of words:
//!
//! 1. **Box split**: cut the stream after every box break
//! 2. **Word grouping**: cut each box at spaces and breaks; breaks become
//!    single-code words of their own, spaces disappear
//! 3. **Line packing**: greedily fill lines with a one-word lookahead,
//!    starting a new physical box whenever the line limit is reached
//!
//! Packing matches the layout existing game text was built with, quirks
//! included; the `pack` module lists the edge cases.

mod boxes;
mod pack;
mod words;

#[cfg(test)]
mod tests;

use smallvec::SmallVec;
use tbx_ir::{ControlKind, Locale, TextCode};

use crate::config::WrapConfig;
use crate::emitter::{emit_box, emit_wrapped, StringEmitter};

pub(crate) use boxes::split_boxes;
pub(crate) use pack::pack_box;
pub(crate) use words::group_words;

/// A run of codes with no space or break inside, or a lone break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    codes: SmallVec<[TextCode; 8]>,
}

impl Word {
    pub fn new(codes: &[TextCode]) -> Self {
        Word {
            codes: SmallVec::from_slice(codes),
        }
    }

    #[inline]
    pub fn codes(&self) -> &[TextCode] {
        &self.codes
    }

    /// Whether this word is a forced line or box break.
    #[inline]
    pub fn is_break(&self) -> bool {
        self.codes.first().is_some_and(TextCode::is_break)
    }

    #[inline]
    pub fn is_box_break(&self) -> bool {
        self.codes
            .first()
            .is_some_and(|code| code.is(ControlKind::BoxBreak))
    }

    pub(crate) fn prepend(&mut self, code: TextCode) {
        self.codes.insert(0, code);
    }
}

/// Words shown on one line of a box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub words: Vec<Word>,
}

impl Line {
    /// Measured width, single-spaced.
    pub fn width(&self, locale: Locale) -> u64 {
        crate::WidthTable::for_locale(locale).line_width(self.words.iter().map(Word::codes))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One physical text box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBox {
    pub lines: Vec<Line>,
}

impl TextBox {
    /// Whether any code in this box is an icon.
    pub fn has_icon(&self) -> bool {
        self.lines
            .iter()
            .flat_map(|line| &line.words)
            .flat_map(Word::codes)
            .any(|code| code.is(ControlKind::Icon))
    }

    /// Code units this box occupies in the message buffer, counting the
    /// spaces and line breaks between its words.
    pub fn char_count(&self, locale: Locale) -> usize {
        let mut emitter = StringEmitter::new(locale);
        emit_box(self, &mut emitter);
        emitter.as_str().chars().count()
    }
}

/// The result of a wrap: physical boxes in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedText {
    pub boxes: Vec<TextBox>,
}

impl WrappedText {
    /// Native message text: words joined by spaces, lines by line breaks,
    /// boxes by box breaks.
    pub fn render(&self, locale: Locale) -> String {
        let mut emitter = StringEmitter::new(locale);
        emit_wrapped(self, &mut emitter);
        emitter.output()
    }

    pub fn line_count(&self) -> usize {
        self.boxes.iter().map(|b| b.lines.len()).sum()
    }

    /// Indices of boxes holding more than `config.max_characters_per_box`
    /// code units.
    ///
    /// The wrap never truncates; callers that must respect the engine's
    /// buffer limit audit with this and shorten their text.
    pub fn overfull_boxes(&self, config: &WrapConfig) -> Vec<usize> {
        self.boxes
            .iter()
            .enumerate()
            .filter(|(_, text_box)| {
                text_box.char_count(config.locale) > config.max_characters_per_box
            })
            .map(|(index, _)| index)
            .collect()
    }
}
