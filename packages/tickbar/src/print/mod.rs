//! Logging setup for programs that draw bars
//!
//! The bar reports misuse through the [`log`] facade. Install a logger
//! with [`init_logging`], or [`log_init`] in tests.
mod init;
pub use init::*;
mod level;
pub use level::*;
