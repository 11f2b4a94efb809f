use std::fmt::Write as _;
use std::time::Instant;

use crate::bar::eta::{DurationFormat, Estimater};

/// The pieces used to draw the `:bar` verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Printed before the bar
    pub start: String,
    /// Printed after the bar
    pub end: String,
    /// Cell that is done
    pub complete: String,
    /// Last done cell, while the bar is not full
    pub head: String,
    /// Cell that is not done yet
    pub incomplete: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            start: "(".to_string(),
            end: ")".to_string(),
            complete: "\u{2588}".to_string(), // █
            head: "\u{2588}".to_string(),
            incomplete: " ".to_string(),
        }
    }
}

impl Glyphs {
    /// `[===>    ]`
    pub fn ascii() -> Self {
        Self {
            start: "[".to_string(),
            end: "]".to_string(),
            complete: "=".to_string(),
            head: ">".to_string(),
            incomplete: " ".to_string(),
        }
    }
}

/// Progress state that the tokens render from
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub progress: u64,
    pub total: u64,
    /// Number of cells in the bar
    pub width: usize,
    pub glyphs: Glyphs,
    pub estimater: Estimater,
}

impl State {
    pub fn new(total: u64, width: usize, glyphs: Glyphs, started_at: Instant) -> Self {
        Self {
            progress: 0,
            total,
            width,
            glyphs,
            estimater: Estimater::new(started_at),
        }
    }

    /// Progress capped at total. Total of 0 counts as complete
    fn done_and_total(&self) -> (u128, u128) {
        if self.total == 0 {
            return (1, 1);
        }
        (self.progress.min(self.total) as u128, self.total as u128)
    }

    /// Number of complete cells
    pub fn filled(&self) -> usize {
        let (done, total) = self.done_and_total();
        (done * self.width as u128 / total) as usize
    }

    /// Completion rounded to a whole percentage
    pub fn percent(&self) -> u64 {
        let (done, total) = self.done_and_total();
        ((done * 200 + total) / (total * 2)) as u64
    }

    pub fn write_bar(&self, out: &mut String) {
        let glyphs = &self.glyphs;
        let filled = self.filled();
        out.push_str(&glyphs.start);
        if filled >= self.width {
            push_repeat(out, &glyphs.complete, self.width);
        } else if filled == 0 {
            push_repeat(out, &glyphs.incomplete, self.width);
        } else {
            push_repeat(out, &glyphs.complete, filled - 1);
            out.push_str(&glyphs.head);
            push_repeat(out, &glyphs.incomplete, self.width - filled);
        }
        out.push_str(&glyphs.end);
    }

    pub fn write_percent(&self, out: &mut String) {
        // _: fmt for string does not fail
        let _ = write!(out, "{}%", self.percent());
    }

    pub fn write_rate(&self, out: &mut String) {
        let _ = write!(out, "{:.2}", self.estimater.rate());
    }

    pub fn write_eta(&self, out: &mut String) {
        match self.estimater.eta() {
            Some(eta) => {
                let _ = write!(out, "{}", DurationFormat(eta));
            }
            None => out.push_str("--"),
        }
    }
}

fn push_repeat(out: &mut String, s: &str, n: usize) {
    for _ in 0..n {
        out.push_str(s);
    }
}
