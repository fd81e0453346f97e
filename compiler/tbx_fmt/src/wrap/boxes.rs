//! Box splitting.

use tbx_ir::{ControlKind, TextCode};

/// Cut `codes` after every box break.
///
/// Each box break stays the last code of the box it closes. The remainder
/// after the last box break is always pushed, even when empty.
pub(crate) fn split_boxes(codes: &[TextCode]) -> Vec<&[TextCode]> {
    let mut boxes = Vec::new();
    let mut start = 0;

    for (index, code) in codes.iter().enumerate() {
        if code.is(ControlKind::BoxBreak) {
            boxes.push(&codes[start..=index]);
            start = index + 1;
        }
    }
    boxes.push(&codes[start..]);

    boxes
}
