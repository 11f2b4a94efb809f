//! In-place terminal progress bar
//!
//! A [`Bar`] renders a format template into a single terminal line and
//! rewrites that line in place as progress is reported. Ad-hoc lines can be
//! printed above the bar with [`Bar::interrupt`] without breaking it.
//!
//! ```rust,no_run
//! let mut bar = tickbar::bar(10)
//!     .format(" :stage :bar :percent ETA :eta ")
//!     .context(tickbar::Context::new().with(tickbar::ctx("stage", "build").unwrap()))
//!     .lines(2)
//!     .build();
//! for i in 0..10 {
//!     bar.tick();
//!     tickbar::interrupt!(bar, "finished step {i}");
//! }
//! bar.done();
//! ```
//!
//! # Format
//! The template is literal text with verb markers like `:bar`. See
//! [`format`] for the built-in verbs. Custom verbs are declared with
//! [`ctx`] and attached to the bar as a [`Context`], either when building or
//! with each update. A marker that is neither built-in nor declared is
//! printed as-is.
//!
//! # Interrupt lines
//! With the default row budget of 0, interrupt lines are printed above
//! the bar and scroll away like normal output. With [`BarBuilder::lines`]
//! or [`Bar::set_lines`], the latest interrupt lines stay visible in a
//! block above the bar and older ones scroll out of it. Up to
//! [`HISTORY_CAPACITY`] lines are remembered, so the block can grow again
//! later and show them.
//!
//! # Output
//! The bar draws through the [`Output`] trait. [`TermOutput`] writes ANSI
//! control codes to stdout or any [`std::io::Write`]. When the stream is
//! not a terminal, every render is printed on its own line instead.
//!
//! # `log` integration
//! Misuse, like updating a bar that is already finalized, is reported with
//! `log::warn!` and the call is ignored. Use [`init_logging`] (or [`log_init`]
//! in tests) to print log messages to stderr.
//!
//! |         | `-qq` | ` -q` | `   ` | ` -v` | `-vv` |
//! |-|-      |-     |-       |-     |-      |
//! | `error!` | ❌ | ✅ | ✅ | ✅ | ✅ |
//! | `warn!`  | ❌ | ❌ | ✅ | ✅ | ✅ |
//! | `info!`  | ❌ | ❌ | ✅ | ✅ | ✅ |
//! | `debug!` | ❌ | ❌ | ❌ | ✅ | ✅ |
//! | `trace!` | ❌ | ❌ | ❌ | ❌ | ✅ |
//!
//! The `RUST_LOG` environment variable is also supported, in the same
//! way as in [`env_logger`](https://docs.rs/env_logger/latest/env_logger/#enabling-logging).

mod bar;
pub use bar::{Bar, BarBuilder, DurationFormat, Glyphs, HISTORY_CAPACITY, IntoProgress, bar};
mod context;
pub use context::*;
mod error;
pub use error::*;
pub mod fmt;
pub mod format;
mod output;
pub use output::*;
mod print;
pub use print::*;
mod stringish;
pub use stringish::*;
