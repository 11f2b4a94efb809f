//! Terminal formatting helpers
pub(crate) mod ansi;
pub use ansi::display_width;

mod term_size;
pub use term_size::*;
