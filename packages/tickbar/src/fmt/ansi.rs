/// Color code definition
#[derive(Clone, Copy)]
pub(crate) struct Colors {
    pub reset: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
    pub gray: &'static str,
    pub magenta: &'static str,
    pub green: &'static str,
}

static NOCOLOR: Colors = Colors {
    reset: "",
    yellow: "",
    red: "",
    gray: "",
    magenta: "",
    green: "",
};

static COLOR: Colors = Colors {
    reset: "\x1b[0m",
    yellow: "\x1b[93m",
    red: "\x1b[91m",
    gray: "\x1b[90m",
    magenta: "\x1b[95m",
    green: "\x1b[92m",
};

#[inline]
pub(crate) const fn colors(use_color: bool) -> Colors {
    if use_color { COLOR } else { NOCOLOR }
}

/// Control codes definition
#[derive(Clone, Copy)]
pub(crate) struct Controls {
    /// Return to the first column and erase the line
    pub move_to_begin_and_clear: &'static str,
    /// Move to the first column of the previous line
    pub move_to_previous_line: &'static str,
}

static NOCONTROL: Controls = Controls {
    move_to_begin_and_clear: "",
    move_to_previous_line: "",
};

static CONTROL: Controls = Controls {
    move_to_begin_and_clear: "\r\x1b[K",
    move_to_previous_line: "\x1b[F",
};

#[inline]
pub(crate) const fn controls(use_controls: bool) -> Controls {
    if use_controls { CONTROL } else { NOCONTROL }
}

/// Iterate the chars of `x` together with their display width.
///
/// Chars of an escape sequence have no width
pub(crate) fn with_width(x: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    use unicode_width::UnicodeWidthChar;
    let mut is_escaping = false;
    x.chars().map(move |c| {
        if is_escaping {
            is_escaping = !is_esc_end(c);
            return (c, 0);
        }
        if c == '\x1b' {
            is_escaping = true;
            return (c, 0);
        }
        (c, c.width_cjk().unwrap_or(0))
    })
}

/// Display width of a string, not counting escape sequences
pub fn display_width(x: &str) -> usize {
    with_width(x).map(|(_, w)| w).sum()
}

pub(crate) fn is_esc_end(c: char) -> bool {
    // we only do very basic check right now
    c < u8::MAX as char && b"mAKGJBCDEFHSTfhlin".contains(&(c as u8))
}
