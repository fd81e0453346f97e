//! Break stripping.
//!
//! Dissolves existing line and box breaks so already-wrapped text can be
//! wrapped again. A stripped break becomes a single space, unless a space
//! already sits on either side of it, in which case it is dropped.

use tbx_ir::{ControlKind, TextCode};

/// Which existing breaks to dissolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripOptions {
    pub lines: bool,
    pub boxes: bool,
}

impl StripOptions {
    pub const NONE: StripOptions = StripOptions {
        lines: false,
        boxes: false,
    };

    pub const ALL: StripOptions = StripOptions {
        lines: true,
        boxes: true,
    };

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.lines && !self.boxes
    }

    #[inline]
    fn strips(self, code: &TextCode) -> bool {
        match code.kind() {
            Some(ControlKind::LineBreak) => self.lines,
            Some(ControlKind::BoxBreak) => self.boxes,
            _ => false,
        }
    }
}

/// Replace stripped breaks with spaces, avoiding double spaces.
///
/// The space check looks at the last code already emitted (so a break that
/// was itself turned into a space counts) and at the next input code (so a
/// break that will be turned into a space later does not).
pub fn strip_breaks(codes: &[TextCode], options: StripOptions) -> Vec<TextCode> {
    let mut out = Vec::with_capacity(codes.len());

    for (i, code) in codes.iter().enumerate() {
        if !options.strips(code) {
            out.push(*code);
            continue;
        }

        let space_before = out.last().is_some_and(TextCode::is_space);
        let space_after = codes.get(i + 1).is_some_and(TextCode::is_space);
        if !space_before && !space_after {
            out.push(TextCode::SPACE);
        }
    }

    out
}

#[cfg(test)]
mod tests;
