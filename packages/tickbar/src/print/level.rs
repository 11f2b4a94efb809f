/// Color level settable with `--color` flag
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ColorLevel {
    #[display("always")]
    Always,
    #[display("never")]
    Never,
    #[default]
    #[display("auto")]
    Auto,
}
impl ColorLevel {
    /// Get if color should be used for log messages. If `Auto`, returns if stderr is terminal.
    pub fn is_colored_for_stderr(self) -> bool {
        use std::io::IsTerminal;
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stderr().is_terminal(),
        }
    }
}

/// Print level settable with `-v` and `-q` flags
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrintLevel {
    QuietQuiet,
    Quiet,
    #[default]
    Normal,
    Verbose,
    VerboseVerbose,
}
impl PrintLevel {
    /// Level from the number of `-v` and `-q` flags. They cancel each other
    pub fn from_flags(verbose: u8, quiet: u8) -> Self {
        match i16::from(verbose) - i16::from(quiet) {
            ..=-2 => Self::QuietQuiet,
            -1 => Self::Quiet,
            0 => Self::Normal,
            1 => Self::Verbose,
            2.. => Self::VerboseVerbose,
        }
    }

    /// Parse the shorthand used by [`log_init`](crate::log_init):
    /// `qq`, `q`, `v`, `vv`, anything else is normal
    pub fn from_shorthand(s: &str) -> Self {
        match s {
            "qq" => Self::from_flags(0, 2),
            "q" => Self::from_flags(0, 1),
            "v" => Self::from_flags(1, 0),
            "vv" => Self::from_flags(2, 0),
            _ => Self::Normal,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        [
            Self::QuietQuiet,
            Self::Quiet,
            Self::Normal,
            Self::Verbose,
            Self::VerboseVerbose,
        ]
        .get(usize::from(value))
        .copied()
        .unwrap_or_default()
    }
}
impl From<PrintLevel> for log::LevelFilter {
    fn from(value: PrintLevel) -> Self {
        match value {
            PrintLevel::QuietQuiet => log::LevelFilter::Off,
            PrintLevel::Quiet => log::LevelFilter::Error,
            PrintLevel::Normal => log::LevelFilter::Info,
            PrintLevel::Verbose => log::LevelFilter::Debug,
            PrintLevel::VerboseVerbose => log::LevelFilter::Trace,
        }
    }
}

/// Level of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lv {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl Lv {
    /// Check if the current print level can print this message level
    pub fn can_print(self, level: PrintLevel) -> bool {
        match self {
            Lv::Error => level != PrintLevel::QuietQuiet,
            Lv::Warn | Lv::Info => level > PrintLevel::Quiet,
            Lv::Debug => level > PrintLevel::Normal,
            Lv::Trace => level == PrintLevel::VerboseVerbose,
        }
    }
    /// The tag printed before the message
    pub fn tag(self) -> char {
        match self {
            Lv::Error => 'E',
            Lv::Warn => 'W',
            Lv::Info => 'I',
            Lv::Debug => 'D',
            Lv::Trace => '*',
        }
    }
}
impl From<log::Level> for Lv {
    fn from(value: log::Level) -> Self {
        match value {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(PrintLevel::from_flags(0, 5), PrintLevel::QuietQuiet);
        assert_eq!(PrintLevel::from_flags(2, 2), PrintLevel::Normal);
        assert_eq!(PrintLevel::from_flags(7, 0), PrintLevel::VerboseVerbose);
        assert_eq!(PrintLevel::from_u8(PrintLevel::Verbose as u8), PrintLevel::Verbose);
        assert_eq!(PrintLevel::from_u8(42), PrintLevel::Normal);
        assert_eq!(ColorLevel::Never.to_string(), "never");
        assert_eq!(PrintLevel::from_shorthand("q"), PrintLevel::Quiet);
        assert_eq!(PrintLevel::from_shorthand(""), PrintLevel::Normal);
    }

    #[test]
    fn test_can_print() {
        assert!(Lv::Error.can_print(PrintLevel::Quiet));
        assert!(!Lv::Warn.can_print(PrintLevel::Quiet));
        assert!(Lv::Warn.can_print(PrintLevel::Normal));
        assert!(!Lv::Debug.can_print(PrintLevel::Normal));
        assert!(!Lv::Trace.can_print(PrintLevel::Verbose));
        assert_eq!(
            log::LevelFilter::from(PrintLevel::Verbose),
            log::LevelFilter::Debug
        );
    }
}
