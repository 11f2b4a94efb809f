/// Columns and rows of the attached terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: usize,
    pub rows: usize,
}

const MAX_SIZE: usize = 400;

/// Get the terminal size, capped as some internal amount.
///
/// Returns `None` if none of stdout, stderr and stdin is a terminal
pub fn term_size() -> Option<TermSize> {
    if cfg!(feature = "__test") {
        // fix the size in test
        return Some(TermSize { cols: 60, rows: 20 });
    }
    use terminal_size::*;
    terminal_size().map(|(Width(w), Height(h))| TermSize {
        cols: (w as usize).min(MAX_SIZE),
        rows: (h as usize).min(MAX_SIZE),
    })
}

/// Get the terminal width, capped as some internal amount
pub fn term_width() -> Option<usize> {
    term_size().map(|x| x.cols)
}

/// Get the terminal width, or `default` if not a terminal
pub fn term_width_or(default: usize) -> usize {
    term_width().unwrap_or(default)
}
