//! Output emission for wrapped text.
//!
//! The [`Emitter`] trait abstracts where rendered codes go; the `emit_*`
//! functions walk a layout and drive an emitter with the separators between
//! words, lines, and boxes.

use tbx_ir::{Control, ControlKind, Locale, TextCode};

use crate::wrap::{Line, TextBox, Word, WrappedText};


/// Sink for rendered text codes and the separators between them.
pub trait Emitter {
    /// Emit one code of a word.
    fn emit_code(&mut self, code: &TextCode);

    /// Emit the gap between two words on a line.
    fn emit_space(&mut self);

    /// Emit the separator between two lines of a box.
    fn emit_line_break(&mut self);

    /// Emit the separator between two boxes.
    fn emit_box_break(&mut self);
}

/// Emitter that renders native message text into a `String`.
pub struct StringEmitter {
    locale: Locale,
    buffer: String,
}

impl StringEmitter {
    pub fn new(locale: Locale) -> Self {
        StringEmitter {
            locale,
            buffer: String::new(),
        }
    }

    pub fn with_capacity(locale: Locale, capacity: usize) -> Self {
        StringEmitter {
            locale,
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the emitter and return the rendered text.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit_code(&mut self, code: &TextCode) {
        code.render(self.locale, &mut self.buffer);
    }

    fn emit_space(&mut self) {
        self.emit_code(&TextCode::SPACE);
    }

    fn emit_line_break(&mut self) {
        Control::bare(ControlKind::LineBreak).render(self.locale, &mut self.buffer);
    }

    fn emit_box_break(&mut self) {
        Control::bare(ControlKind::BoxBreak).render(self.locale, &mut self.buffer);
    }
}

pub fn emit_word<E: Emitter + ?Sized>(word: &Word, emitter: &mut E) {
    for code in word.codes() {
        emitter.emit_code(code);
    }
}

pub fn emit_line<E: Emitter + ?Sized>(line: &Line, emitter: &mut E) {
    for (index, word) in line.words.iter().enumerate() {
        if index > 0 {
            emitter.emit_space();
        }
        emit_word(word, emitter);
    }
}

pub fn emit_box<E: Emitter + ?Sized>(text_box: &TextBox, emitter: &mut E) {
    for (index, line) in text_box.lines.iter().enumerate() {
        if index > 0 {
            emitter.emit_line_break();
        }
        emit_line(line, emitter);
    }
}

pub fn emit_wrapped<E: Emitter + ?Sized>(text: &WrappedText, emitter: &mut E) {
    for (index, text_box) in text.boxes.iter().enumerate() {
        if index > 0 {
            emitter.emit_box_break();
        }
        emit_box(text_box, emitter);
    }
}
