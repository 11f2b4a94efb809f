use std::io::Write as _;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::fmt::ansi;

use super::{ColorLevel, Lv, PrintLevel};

static LOG_FILTER: OnceLock<env_filter::Filter> = OnceLock::new();
static PRINT_LEVEL: AtomicU8 = AtomicU8::new(PrintLevel::Normal as u8);
static USE_COLOR: AtomicBool = AtomicBool::new(false);

/// Install a logger that prints to stderr. This is usually called from clap args.
///
/// If `RUST_LOG` is set, it is used to filter messages, and the max level
/// is the more verbose one of `RUST_LOG` and `level`.
///
/// The logger can only be installed once. Calling this again
/// updates the level and color options.
pub fn init_logging(color: ColorLevel, level: PrintLevel) {
    let log_level = if let Ok(value) = std::env::var("RUST_LOG")
        && !value.is_empty()
    {
        let mut builder = env_filter::Builder::new();
        let filter = builder.parse(&value).build();
        let log_level = filter.filter();
        let _ = LOG_FILTER.set(filter);
        log_level.max(level.into())
    } else {
        level.into()
    };
    log::set_max_level(log_level);
    USE_COLOR.store(color.is_colored_for_stderr(), Ordering::Release);
    PRINT_LEVEL.store(level as u8, Ordering::Release);

    struct LogImpl;
    impl log::Log for LogImpl {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            match LOG_FILTER.get() {
                Some(filter) => filter.enabled(metadata),
                None => Lv::from(metadata.level())
                    .can_print(PrintLevel::from_u8(PRINT_LEVEL.load(Ordering::Acquire))),
            }
        }

        fn log(&self, record: &log::Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let message = format_message(
                record.level().into(),
                &record.args().to_string(),
                USE_COLOR.load(Ordering::Acquire),
            );
            let mut stderr = std::io::stderr().lock();
            let _ = stderr.write_all(message.as_bytes());
            let _ = stderr.flush();
        }

        fn flush(&self) {}
    }

    let _ = log::set_logger(&LogImpl);
}

/// Quickly initialize logging, usually in tests.
///
/// `level` is one of `qq`, `q`, `v`, `vv`, or empty for normal.
/// Color is enabled if stderr is a terminal
///
/// ```rust
/// tickbar::log_init("vv");
/// log::debug!("visible");
/// ```
#[inline(always)]
pub fn log_init(level: &str) {
    init_logging(ColorLevel::Auto, PrintLevel::from_shorthand(level))
}

/// Get if the logger prints with color
pub fn color_enabled() -> bool {
    USE_COLOR.load(Ordering::Acquire)
}

/// Format a message with the level tag, e.g. `W] something happened`.
///
/// Continuation lines of a multi-line message are indented under the first.
fn format_message(lv: Lv, message: &str, use_color: bool) -> String {
    let colors = ansi::colors(use_color);
    let (tag_color, text_color) = match lv {
        Lv::Error => (colors.red, colors.red),
        Lv::Warn => (colors.yellow, colors.yellow),
        Lv::Info => (colors.green, colors.reset),
        Lv::Debug => (colors.gray, colors.gray),
        Lv::Trace => (colors.magenta, colors.magenta),
    };
    let mut out = String::with_capacity(message.len() + 16);
    out.push_str(tag_color);
    out.push(lv.tag());
    out.push_str(colors.gray);
    out.push(']');
    out.push_str(text_color);
    let mut lines = message.lines();
    if let Some(line) = lines.next() {
        out.push(' ');
        out.push_str(line);
    }
    for line in lines {
        out.push_str("\n   ");
        out.push_str(line);
    }
    out.push_str(colors.reset);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(Lv::Warn, "bar is closed", false),
            "W] bar is closed\n"
        );
        assert_eq!(format_message(Lv::Debug, "a\nb", false), "D] a\n   b\n");
        assert_eq!(
            format_message(Lv::Info, "hi", true),
            "\x1b[92mI\x1b[90m]\x1b[0m hi\x1b[0m\n"
        );
    }
}
