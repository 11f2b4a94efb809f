#![allow(dead_code)]

use tickbar::Output;

/// A virtual terminal that applies the bar's operations to a grid of rows
#[derive(Debug, Default)]
pub struct Screen {
    rows: Vec<String>,
    row: usize,
    /// Number of rows moved up in total
    pub moved_up: usize,
    /// Number of operations applied
    pub ops: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            rows: vec![String::new()],
            ..Default::default()
        }
    }

    /// All rows from the top
    pub fn rows(&self) -> Vec<&str> {
        self.rows.iter().map(String::as_str).collect()
    }

    /// Row the cursor is on
    pub fn cursor(&self) -> usize {
        self.row
    }

    /// Text on the cursor row
    pub fn current(&self) -> &str {
        &self.rows[self.row]
    }

    /// The `n` rows right above the cursor, top first
    pub fn above(&self, n: usize) -> Vec<&str> {
        self.rows[self.row - n..self.row]
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn ensure_row(&mut self) {
        while self.rows.len() <= self.row {
            self.rows.push(String::new());
        }
    }
}

impl Output for Screen {
    fn clear_line(&mut self) {
        self.ops += 1;
        self.ensure_row();
        self.rows[self.row].clear();
    }

    fn write_formatted(&mut self, args: std::fmt::Arguments<'_>) {
        self.ops += 1;
        let text = args.to_string();
        for c in text.chars() {
            self.ensure_row();
            if c == '\n' {
                self.row += 1;
            } else {
                self.rows[self.row].push(c);
            }
        }
        self.ensure_row();
    }

    fn move_up(&mut self, rows: usize) {
        self.ops += 1;
        self.moved_up += rows;
        self.row = self.row.saturating_sub(rows);
    }
}

/// A bar drawing `BAR` on a virtual screen
pub fn screen_bar(total: u64, lines: usize) -> tickbar::Bar<Screen> {
    tickbar::bar(total)
        .format("BAR")
        .lines(lines)
        .build_with(Screen::new())
}
