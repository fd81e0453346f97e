//! Word grouping.

use tbx_ir::{Control, ControlKind, TextCode};

use super::Word;

/// The words of one source box.
#[derive(Debug, Default)]
pub(crate) struct GroupedBox {
    pub words: Vec<Word>,
    /// The last icon in the box; its presence narrows every line.
    pub icon: Option<Control>,
}

/// Group the codes of one box into words.
///
/// Spaces and breaks delimit words. Spaces are dropped; each break is kept
/// as a word of its own so the packer sees where forced breaks fall.
pub(crate) fn group_words(codes: &[TextCode]) -> GroupedBox {
    let mut grouped = GroupedBox::default();
    let mut word_start = 0;

    for (index, code) in codes.iter().enumerate() {
        if let TextCode::Control(control) = code {
            if control.kind == ControlKind::Icon {
                grouped.icon = Some(*control);
            }
        }

        if code.is_space() || code.is_break() {
            if index > word_start {
                grouped.words.push(Word::new(&codes[word_start..index]));
            }
            if code.is_break() {
                grouped.words.push(Word::new(&codes[index..=index]));
            }
            word_start = index + 1;
        }
    }

    if word_start < codes.len() {
        grouped.words.push(Word::new(&codes[word_start..]));
    }

    grouped
}
