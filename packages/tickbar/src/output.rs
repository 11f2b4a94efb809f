use std::io::Write;

use crate::fmt::{self, ansi};

/// Where a bar is printed.
///
/// The bar never writes escape codes by itself. Everything it needs
/// from the terminal goes through this trait.
pub trait Output {
    /// Clear the current line and return the cursor to the first column
    fn clear_line(&mut self);

    /// Write formatted text at the cursor
    fn write_formatted(&mut self, args: std::fmt::Arguments<'_>);

    /// Move the cursor to the first column, `rows` lines up
    fn move_up(&mut self, rows: usize);

    /// If the cursor can be moved with [`move_up`](Self::move_up).
    ///
    /// When this is `false`, the bar behaves as if it only has one line
    /// (interrupts are printed above the bar and never redrawn)
    fn supports_cursor(&self) -> bool {
        true
    }

    /// Flush written content to the underlying stream
    fn flush(&mut self) {}

    /// Write `line` followed by a newline
    fn write_line(&mut self, line: &str) {
        self.write_formatted(format_args!("{line}\n"));
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn clear_line(&mut self) {
        (**self).clear_line()
    }
    fn write_formatted(&mut self, args: std::fmt::Arguments<'_>) {
        (**self).write_formatted(args)
    }
    fn move_up(&mut self, rows: usize) {
        (**self).move_up(rows)
    }
    fn supports_cursor(&self) -> bool {
        (**self).supports_cursor()
    }
    fn flush(&mut self) {
        (**self).flush()
    }
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn clear_line(&mut self) {
        (**self).clear_line()
    }
    fn write_formatted(&mut self, args: std::fmt::Arguments<'_>) {
        (**self).write_formatted(args)
    }
    fn move_up(&mut self, rows: usize) {
        (**self).move_up(rows)
    }
    fn supports_cursor(&self) -> bool {
        (**self).supports_cursor()
    }
    fn flush(&mut self) {
        (**self).flush()
    }
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

/// Maximum number of columns printed on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWidth {
    /// Don't cut lines
    Unlimited,
    /// Cut lines at a fixed number of columns
    Fixed(usize),
    /// Cut lines at the current terminal width
    Terminal,
}

/// [`Output`] that writes ANSI control codes to a stream.
///
/// Lines longer than the [`LineWidth`] are cut, so each line
/// occupies exactly one row in the terminal and moving the cursor
/// up stays accurate. Escape sequences in the text don't count
/// towards the width.
///
/// When controls are disabled (e.g. output is redirected to a file),
/// clearing the line starts a new line instead, so each render
/// of the bar ends up on its own line.
///
/// I/O errors are ignored.
pub struct TermOutput<W: Write> {
    writer: W,
    controls: ansi::Controls,
    use_controls: bool,
    width: LineWidth,
    /// Columns used in the current line
    column: usize,
    /// Formatting buffer
    buffer: String,
}

impl TermOutput<std::io::Stdout> {
    /// Output to stdout. Controls are enabled if stdout is a terminal
    pub fn stdout() -> Self {
        use std::io::IsTerminal as _;
        let stdout = std::io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::new(stdout)
            .controls(is_terminal)
            .width(if is_terminal { LineWidth::Terminal } else { LineWidth::Unlimited })
    }
}

impl TermOutput<std::io::Stderr> {
    /// Output to stderr. Controls are enabled if stderr is a terminal
    pub fn stderr() -> Self {
        use std::io::IsTerminal as _;
        let stderr = std::io::stderr();
        let is_terminal = stderr.is_terminal();
        Self::new(stderr)
            .controls(is_terminal)
            .width(if is_terminal { LineWidth::Terminal } else { LineWidth::Unlimited })
    }
}

impl<W: Write> TermOutput<W> {
    /// Wrap a writer, with controls enabled and no width limit
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            controls: ansi::controls(true),
            use_controls: true,
            width: LineWidth::Unlimited,
            column: 0,
            buffer: String::new(),
        }
    }
    /// Set if ANSI control codes are written
    pub fn controls(mut self, use_controls: bool) -> Self {
        self.controls = ansi::controls(use_controls);
        self.use_controls = use_controls;
        self
    }
    /// Set the maximum width of a line
    pub fn width(mut self, width: LineWidth) -> Self {
        self.width = width;
        self
    }
    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn max_columns(&self) -> Option<usize> {
        match self.width {
            LineWidth::Unlimited => None,
            LineWidth::Fixed(x) => Some(x),
            // last column is left empty to avoid auto-wrap
            LineWidth::Terminal => fmt::term_width().map(|x| x.saturating_sub(1)),
        }
    }
}

impl<W: Write> Output for TermOutput<W> {
    fn clear_line(&mut self) {
        if self.use_controls {
            let _ = self.writer.write_all(self.controls.move_to_begin_and_clear.as_bytes());
        } else if self.column > 0 {
            let _ = self.writer.write_all(b"\n");
        }
        self.column = 0;
    }

    fn write_formatted(&mut self, args: std::fmt::Arguments<'_>) {
        use std::fmt::Write as _;
        self.buffer.clear();
        // _: fmt for string does not fail
        let _ = self.buffer.write_fmt(args);
        let max = self.max_columns();
        let mut out = String::with_capacity(self.buffer.len());
        for (c, w) in ansi::with_width(&self.buffer) {
            match c {
                '\n' => {
                    self.column = 0;
                    out.push(c);
                }
                '\r' => {
                    self.column = 0;
                    out.push(c);
                }
                _ if w == 0 => out.push(c),
                _ => {
                    if max.is_some_and(|max| self.column + w > max) {
                        continue;
                    }
                    self.column += w;
                    out.push(c);
                }
            }
        }
        let _ = self.writer.write_all(out.as_bytes());
    }

    fn move_up(&mut self, rows: usize) {
        if !self.use_controls {
            return;
        }
        log::trace!("moving cursor up {rows} rows");
        for _ in 0..rows {
            let _ = self.writer.write_all(self.controls.move_to_previous_line.as_bytes());
        }
        self.column = 0;
    }

    fn supports_cursor(&self) -> bool {
        self.use_controls
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(out: TermOutput<Vec<u8>>) -> String {
        String::from_utf8(out.into_inner()).unwrap()
    }

    /// Records `write_line` calls instead of writing
    #[derive(Default)]
    struct LineRecorder(Vec<String>);
    impl Output for LineRecorder {
        fn clear_line(&mut self) {}
        fn write_formatted(&mut self, _: std::fmt::Arguments<'_>) {}
        fn move_up(&mut self, _: usize) {}
        fn write_line(&mut self, line: &str) {
            self.0.push(line.to_string());
        }
    }

    #[test]
    fn test_wrappers_forward_write_line() {
        let mut recorder = LineRecorder::default();
        <&mut LineRecorder as Output>::write_line(&mut &mut recorder, "by ref");
        let mut boxed = Box::new(recorder);
        <Box<LineRecorder> as Output>::write_line(&mut boxed, "boxed");
        assert_eq!(boxed.0, ["by ref", "boxed"]);
    }

    #[test]
    fn test_controls() {
        let mut out = TermOutput::new(Vec::new());
        out.clear_line();
        out.write_line("hello");
        out.move_up(2);
        out.write_formatted(format_args!("{}%", 50));
        assert_eq!(written(out), "\r\x1b[Khello\n\x1b[F\x1b[F50%");
    }

    #[test]
    fn test_no_controls() {
        let mut out = TermOutput::new(Vec::new()).controls(false);
        out.clear_line();
        out.write_formatted(format_args!("bar 1"));
        out.clear_line();
        out.write_formatted(format_args!("bar 2"));
        out.move_up(3);
        out.clear_line();
        out.write_line("message");
        out.clear_line();
        out.write_formatted(format_args!("bar 3"));
        assert!(!out.supports_cursor());
        assert_eq!(written(out), "bar 1\nbar 2\nmessage\nbar 3");
    }

    #[test]
    fn test_cut_to_width() {
        let mut out = TermOutput::new(Vec::new()).width(LineWidth::Fixed(4));
        out.write_line("\x1b[92mabcdef\x1b[0m");
        out.write_formatted(format_args!("进度条"));
        assert_eq!(written(out), "\x1b[92mabcd\x1b[0m\n进度");
    }
}
