//! Line packing.
//!
//! Greedy fill with a one-word lookahead: after taking a word, the line is
//! closed if taking the *next* word as well would exceed the budget.
//! Widths of candidate lines come from prefix sums over the word widths.
//!
//! Edge cases that existing text depends on:
//!
//! - A forced break with nothing before it still yields an empty line,
//!   except at the very top of a box. Runs of breaks therefore render
//!   as consecutive break codes.
//! - A word wider than the budget sits alone on its line.
//! - A source box that fills up spills into further physical boxes; the
//!   box's icon is re-injected at the front of the first word of each
//!   spill box so it keeps showing.

use std::mem;
use std::ops::Range;

use tracing::{debug, trace};

use crate::config::WrapConfig;
use crate::width::WidthTable;

use super::words::GroupedBox;
use super::{Line, TextBox, Word};

/// Word widths as running totals.
struct Spans {
    prefix: Vec<u64>,
    space: u64,
}

impl Spans {
    fn new(words: &[Word], table: &WidthTable) -> Self {
        let mut prefix = Vec::with_capacity(words.len() + 1);
        let mut total = 0;
        prefix.push(total);
        for word in words {
            total += table.word_width(word.codes());
            prefix.push(total);
        }
        Spans {
            prefix,
            space: table.space_width(),
        }
    }

    /// Width of `words[range]` laid out on one line. `range` is non-empty.
    fn width(&self, range: Range<usize>) -> u64 {
        let gaps = (range.end - range.start).saturating_sub(1) as u64;
        self.prefix[range.end] - self.prefix[range.start] + self.space * gaps
    }
}

/// Pack one source box into `out`, one or more physical boxes.
pub(crate) fn pack_box(
    grouped: GroupedBox,
    table: &WidthTable,
    config: &WrapConfig,
    out: &mut Vec<TextBox>,
) {
    let GroupedBox { words, icon } = grouped;
    let budget = config.budget(icon.is_some());
    let lines_per_box = config.lines_per_box.max(1);
    let spans = Spans::new(&words, table);

    let mut lines: Vec<Line> = Vec::new();
    let mut spill = 0usize;
    let mut start = 0;
    let mut end = 0;

    while end < words.len() {
        end += 1;
        let last = &words[end - 1];
        let forced = last.is_break();
        let at_end = end == words.len();
        let line_end = if forced { end - 1 } else { end };

        if at_end || forced || spans.width(start..end + 1) > budget {
            if line_end > start || !lines.is_empty() {
                trace!(words = line_end - start, forced, "line");
                lines.push(Line {
                    words: words[start..line_end].to_vec(),
                });
            }
            start = end;
        }

        if at_end || last.is_box_break() || lines.len() >= lines_per_box {
            let mut packed = mem::take(&mut lines);
            if spill > 0 {
                if let Some(icon) = icon {
                    if let Some(first) = packed.first_mut().and_then(|line| line.words.first_mut())
                    {
                        first.prepend(icon.into());
                    }
                }
            }
            debug!(locale = %table.locale(), lines = packed.len(), spill, budget, "box");
            out.push(TextBox { lines: packed });
            spill += 1;
        }
    }
}
