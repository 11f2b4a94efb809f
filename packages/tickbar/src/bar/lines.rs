use std::collections::VecDeque;

use crate::Output;

/// Max number of interrupt lines remembered
pub const HISTORY_CAPACITY: usize = 20;

/// Tracks the interrupt lines displayed above the bar.
///
/// The bar block looks like this, with `cursor_row` lines above the bar,
/// oldest on top:
/// ```txt
/// history[cursor_row - 1]
/// ...
/// history[1]
/// history[0]
/// <bar>
/// ```
/// The cursor is always on the bar line between operations. None of
/// the operations here print the bar, the caller prints it after.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineBuffer {
    /// Row budget for interrupt lines
    visible_lines: usize,
    /// Rows currently displayed above the bar
    cursor_row: usize,
    /// Most recent first
    history: VecDeque<String>,
}

impl LineBuffer {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            visible_lines: visible_lines.min(HISTORY_CAPACITY),
            ..Default::default()
        }
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    /// Change the row budget and redraw the block.
    ///
    /// Rows that are still part of the block are redrawn in place.
    /// Growing the block pushes the bar down and reveals older history
    /// (or blank lines), shrinking it leaves the top rows on screen
    /// as regular output.
    pub fn set_lines<O: Output>(&mut self, lines: usize, out: &mut O) {
        let lines = lines.min(HISTORY_CAPACITY);
        if !out.supports_cursor() {
            // nothing is ever displayed above the bar
            self.visible_lines = lines;
            return;
        }
        let old = self.cursor_row;
        let new = (old + lines).saturating_sub(self.visible_lines).min(lines);
        log::debug!(
            "row budget {} -> {lines}, rows above bar {old} -> {new}",
            self.visible_lines
        );
        self.visible_lines = lines;
        self.cursor_row = new;
        out.move_up(old.min(new));
        while self.history.len() < new {
            self.history.push_back(String::new());
        }
        self.redraw_rows(new, 0, out);
    }

    /// Print `line` above the bar
    pub fn interrupt<O: Output>(&mut self, line: &str, out: &mut O) {
        if self.visible_lines == 0 || !out.supports_cursor() {
            out.clear_line();
            out.write_line(line);
            return;
        }
        if self.cursor_row == self.visible_lines {
            // block is full, scroll it up by redrawing every row
            out.move_up(self.visible_lines);
            self.push(line);
            self.redraw_rows(self.visible_lines, 1, out);
        } else {
            // block is still growing, add a row
            self.cursor_row += 1;
            self.push(line);
        }
        out.clear_line();
        out.write_line(line);
    }

    fn push(&mut self, line: &str) {
        self.history.push_front(line.to_string());
        self.history.truncate(HISTORY_CAPACITY);
    }

    /// Print `history[end-1]` down to `history[start]`, one per row
    fn redraw_rows<O: Output>(&self, end: usize, start: usize, out: &mut O) {
        for i in (start..end).rev() {
            out.clear_line();
            out.write_line(self.history.get(i).map_or("", String::as_str));
        }
    }
}
