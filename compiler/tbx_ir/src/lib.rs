//! Text Box IR
//!
//! Shared vocabulary for the text box reflow pipeline:
//!
//! - [`Locale`]: which engine build the text targets (code values, code unit width)
//! - [`ControlKind`]: the catalog of in-message control operations
//! - [`TextCode`]: one parsed unit of message text, a glyph or a control
//!
//! Everything here is plain `Copy` data. The locale is always passed
//! explicitly; nothing in the pipeline reads ambient configuration.

mod control;
mod locale;
mod text_code;

pub use control::ControlKind;
pub use locale::{Locale, UnknownLocale};
pub use text_code::{Control, TextCode};
