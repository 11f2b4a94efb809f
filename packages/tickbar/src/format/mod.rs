//! Format templates
//!
//! A template is literal text with verb markers of the form `:identifier`.
//! The built-in verbs are:
//! - `:bar` - the glyph run sized to the completion fraction
//! - `:percent` - completion percentage, e.g. `42%`
//! - `:rate` - work units per second, e.g. `12.50`
//! - `:eta` - estimated remaining time, e.g. `1m05s`, or `--` if unknown
//!
//! Any other identifier is looked up in the custom verbs of the attached
//! [`Context`](crate::Context). Markers that don't resolve are kept as
//! literal text.

mod token;
pub use token::*;
mod tokenizer;
pub use tokenizer::*;

/// The template used when none is configured
pub const DEFAULT_FORMAT: &str = " :bar :percent :rate ops/s ";
