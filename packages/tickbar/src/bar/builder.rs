use std::time::Instant;

use crate::bar::{Bar, Glyphs};
use crate::{Context, Output, TermOutput};

/// Make a progress bar builder with the following defaults:
///
/// - Width: 20 cells
/// - Glyphs: `(███     )`, see [`Glyphs`]
/// - Lines: 0 (interrupts are printed above the bar and never redrawn)
/// - Format: [`DEFAULT_FORMAT`](crate::format::DEFAULT_FORMAT)
/// - No context, no completion callback, no debug
///
/// See [`BarBuilder`] for builder methods
#[inline(always)]
pub fn bar(total: u64) -> BarBuilder {
    BarBuilder::new(total)
}

/// Builder for a progress bar
pub struct BarBuilder {
    /// Total work units, fixed for the life of the bar
    pub(crate) total: u64,
    /// Number of cells in `:bar`
    pub(crate) width: usize,
    pub(crate) glyphs: Glyphs,
    /// Row budget for interrupt lines
    pub(crate) lines: usize,
    pub(crate) format: String,
    pub(crate) context: Context,
    pub(crate) on_done: Option<Box<dyn FnOnce() + Send>>,
    /// Print token descriptors instead of rendering them
    pub(crate) debug: bool,
    /// None means when the bar is built
    pub(crate) started_at: Option<Instant>,
}

impl BarBuilder {
    /// Start building a progress bar. Note [`tickbar::bar`](bar) is the canonical shorthand
    pub fn new(total: u64) -> Self {
        Self {
            total,
            width: 20,
            glyphs: Glyphs::default(),
            lines: 0,
            format: crate::format::DEFAULT_FORMAT.to_string(),
            context: Context::default(),
            on_done: None,
            debug: false,
            started_at: None,
        }
    }

    /// Set the number of cells in the `:bar` verb
    ///
    /// ```rust
    /// let bar = tickbar::bar(10).width(40);
    /// ```
    #[inline(always)]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set all the glyphs used to draw `:bar`
    ///
    /// ```rust
    /// let bar = tickbar::bar(10).glyphs(tickbar::Glyphs::ascii());
    /// ```
    #[inline(always)]
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the glyph printed before the bar
    #[inline(always)]
    pub fn start(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.start = glyph.into();
        self
    }

    /// Set the glyph printed after the bar
    #[inline(always)]
    pub fn end(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.end = glyph.into();
        self
    }

    /// Set the glyph for done cells
    #[inline(always)]
    pub fn complete(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.complete = glyph.into();
        self
    }

    /// Set the glyph for the last done cell
    #[inline(always)]
    pub fn head(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.head = glyph.into();
        self
    }

    /// Set the glyph for cells not done yet
    #[inline(always)]
    pub fn incomplete(mut self, glyph: impl Into<String>) -> Self {
        self.glyphs.incomplete = glyph.into();
        self
    }

    /// Set how many of the latest interrupt lines stay visible above
    /// the bar. Capped at [`HISTORY_CAPACITY`](crate::HISTORY_CAPACITY).
    ///
    /// With 0 (the default), interrupt lines are printed above the bar
    /// and scroll away like normal output.
    ///
    /// ```rust
    /// let bar = tickbar::bar(10).lines(3);
    /// ```
    #[inline(always)]
    pub fn lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    /// Set the format template. See [`format`](crate::format) for the syntax
    ///
    /// ```rust
    /// let bar = tickbar::bar(10).format(":stage :bar :percent ETA :eta");
    /// ```
    #[inline(always)]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = template.into();
        self
    }

    /// Set the initial context for custom verbs
    #[inline(always)]
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Set a callback invoked once when the bar is finalized
    #[inline(always)]
    pub fn on_done<F: FnOnce() + Send + 'static>(mut self, f: F) -> Self {
        self.on_done = Some(Box::new(f));
        self
    }

    /// Render a descriptor of each token instead of its value
    #[inline(always)]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the time the work started, used for rate and ETA. Default is
    /// when the bar is built
    #[inline(always)]
    pub fn started_at(mut self, instant: Instant) -> Self {
        self.started_at = Some(instant);
        self
    }

    /// Build the bar, printing to stdout
    pub fn build(self) -> Bar<TermOutput<std::io::Stdout>> {
        self.build_with(TermOutput::stdout())
    }

    /// Build the bar with a custom output
    pub fn build_with<O: Output>(self, output: O) -> Bar<O> {
        Bar::from_builder(self, output)
    }
}
