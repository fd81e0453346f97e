//! Text Box Formatter
//!
//! Line-wrap and reflow engine for in-game dialogue text.
//!
//! # Architecture
//!
//! Wrapping is a measure-then-pack pipeline over text codes:
//!
//! 1. **Normalize**: substitute stand-ins, parse controls, optionally strip
//!    existing breaks (see `tbx_lexer`)
//! 2. **Split**: cut the stream into source boxes at box breaks
//! 3. **Group**: cut each box into words
//! 4. **Pack**: fill lines against the glyph-width budget and spill full
//!    boxes into new ones
//! 5. **Emit**: join words, lines, and boxes with native separators
//!
//! # Modules
//!
//! - [`width`]: Glyph width tables for each locale
//! - [`config`]: Wrap budgets and normalization options
//! - [`emitter`]: Output abstraction for rendered text

pub mod config;
pub mod emitter;
pub mod width;
mod wrap;

use std::sync::Once;

use tbx_ir::TextCode;
use tbx_lexer::normalize;
use tracing::debug_span;

pub use config::{WrapConfig, ICON_LINE_WIDTH, LINES_PER_BOX, MAX_CHARACTERS_PER_BOX};
pub use emitter::{Emitter, StringEmitter};
pub use width::{WidthTable, NORMAL_LINE_WIDTH};
pub use wrap::{Line, TextBox, Word, WrappedText};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call any number of times; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}

/// Lay out an already-normalized code stream.
pub fn wrap_codes(codes: &[TextCode], config: &WrapConfig) -> WrappedText {
    let table = WidthTable::for_locale(config.locale);
    let mut boxes = Vec::new();

    for source in wrap::split_boxes(codes) {
        wrap::pack_box(wrap::group_words(source), table, config, &mut boxes);
    }

    WrappedText { boxes }
}

/// Wrap message text to fit the text box.
///
/// Stand-ins are substituted and existing breaks stripped according to
/// `config.normalize`; the result is native message text.
///
/// # Example
///
/// ```
/// use tbx_fmt::{line_wrap, WrapConfig};
///
/// let wrapped = line_wrap("Hello World! Hello World! Hello World!", &WrapConfig::default());
/// assert_eq!(wrapped, "Hello World! Hello World! Hello\u{01}World!");
/// ```
pub fn line_wrap(text: &str, config: &WrapConfig) -> String {
    let _span = debug_span!("line_wrap", locale = %config.locale, len = text.len()).entered();

    let codes = normalize(text, config.locale, &config.normalize);
    wrap_codes(&codes, config).render(config.locale)
}
