use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::format::{self, Token};
use crate::{Context, Output, TermOutput};

mod builder;
pub use builder::*;
mod eta;
pub use eta::DurationFormat;
mod lines;
pub use lines::HISTORY_CAPACITY;
mod state;
pub use state::Glyphs;

pub(crate) use lines::LineBuffer;
pub(crate) use state::State;

/// Print a line above a bar, with format args
///
/// # Examples
/// ```rust,no_run
/// let mut bar = tickbar::bar(10).lines(2).build();
/// for i in 0..10 {
///     bar.tick();
///     if i % 2 == 0 {
///         tickbar::interrupt!(bar, "{i} is even!");
///     }
/// }
/// bar.done();
/// ```
#[macro_export]
macro_rules! interrupt {
    ($bar:expr, $($fmt_args:tt)*) => {
        $bar.interrupt_fmt(format_args!($($fmt_args)*))
    };
}

/// A progress bar that renders in place in the terminal.
///
/// Every update re-renders the format template and rewrites the
/// bar line. Lines can be printed above the bar with
/// [`interrupt`](Self::interrupt) without messing it up. With a row
/// budget (see [`set_lines`](Self::set_lines)), the latest interrupt
/// lines stay displayed above the bar and older ones scroll away.
///
/// Once [finalized](Self::finalize), the bar can no longer be changed.
/// Calls that would change it are ignored with a warning logged, so a
/// stale handle doesn't bring down the program.
pub struct Bar<O: Output = TermOutput<std::io::Stdout>> {
    state: State,
    closed: bool,
    template: String,
    tokens: Vec<Token>,
    context: Context,
    on_done: Option<Box<dyn FnOnce() + Send>>,
    output: O,
    debug: bool,
    lines: LineBuffer,
}

impl Bar {
    /// Create a bar printing to stdout, with default options.
    ///
    /// Use [`tickbar::bar`](crate::bar()) to configure the bar
    pub fn new(total: u64) -> Self {
        builder::bar(total).build()
    }
}

impl<O: Output> Bar<O> {
    pub(crate) fn from_builder(builder: BarBuilder, output: O) -> Self {
        let started_at = builder.started_at.unwrap_or_else(Instant::now);
        let tokens = format::tokenize(&builder.format, builder.context.custom_verbs());
        Self {
            state: State::new(builder.total, builder.width, builder.glyphs, started_at),
            closed: false,
            template: builder.format,
            tokens,
            context: builder.context,
            on_done: builder.on_done,
            output,
            debug: builder.debug,
            lines: LineBuffer::new(builder.lines),
        }
    }

    /// Increment the progress by 1
    #[inline(always)]
    pub fn tick(&mut self) {
        if !self.can_update("tick") {
            return;
        }
        self.update_at(self.state.progress.saturating_add(1), None, Instant::now());
    }

    /// Increment the progress by 1 and replace the context
    #[inline(always)]
    pub fn tick_and_update(&mut self, context: Context) {
        if !self.can_update("tick_and_update") {
            return;
        }
        self.update_at(
            self.state.progress.saturating_add(1),
            Some(context),
            Instant::now(),
        );
    }

    /// Set the progress, and optionally replace the context.
    ///
    /// Replacing the context re-compiles the format against the
    /// custom verbs of the new context.
    #[inline(always)]
    pub fn update<T: IntoProgress>(&mut self, progress: T, context: Option<Context>) {
        self.update_at(progress, context, Instant::now())
    }

    /// Same as [`update`](Self::update), with an explicit time for
    /// computing the rate and ETA
    pub fn update_at<T: IntoProgress>(
        &mut self,
        progress: T,
        context: Option<Context>,
        now: Instant,
    ) {
        if !self.can_update("update") {
            return;
        }
        self.state.progress = progress.into_progress();
        self.state
            .estimater
            .update(now, self.state.progress, self.state.total);
        if let Some(context) = context {
            self.context = context;
            self.recompile();
        }
        self.write();
    }

    /// Change the format template. It is compiled against the custom
    /// verbs of the current context
    pub fn set_format(&mut self, template: impl Into<String>) {
        if !self.can_update("set_format") {
            return;
        }
        self.template = template.into();
        self.recompile();
        self.write();
    }

    /// Change how many of the latest interrupt lines stay visible above
    /// the bar, and redraw.
    ///
    /// Capped at [`HISTORY_CAPACITY`]. Calling this again with the same
    /// value redraws the same content.
    pub fn set_lines(&mut self, lines: usize) {
        if !self.can_update("set_lines") {
            return;
        }
        self.lines.set_lines(lines, &mut self.output);
        self.write();
    }

    /// Get the row budget for interrupt lines
    pub fn lines(&self) -> usize {
        self.lines.visible_lines()
    }

    /// Print `line` above the bar.
    ///
    /// Text with newlines is printed as multiple lines. One trailing
    /// newline is ignored. Ignored if the bar is closed.
    pub fn interrupt(&mut self, line: &str) {
        if !self.can_update("interrupt") {
            return;
        }
        let text = line.strip_suffix('\n').unwrap_or(line);
        for line in text.split('\n') {
            self.lines.interrupt(line.trim_end_matches('\r'), &mut self.output);
        }
        self.write();
    }

    /// Format and print above the bar. See also [`interrupt!`](crate::interrupt)
    pub fn interrupt_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        match args.as_str() {
            Some(line) => self.interrupt(line),
            None => self.interrupt(&args.to_string()),
        }
    }

    /// Close the bar: print it a final time followed by a new line,
    /// then invoke the completion callback.
    ///
    /// Only the first call has an effect
    pub fn finalize(&mut self) {
        if !self.can_update("finalize") {
            return;
        }
        self.closed = true;
        self.write();
        self.output.write_formatted(format_args!("\n"));
        self.output.flush();
        if let Some(f) = self.on_done.take() {
            f();
        }
    }

    /// Alias for [`finalize`](Self::finalize)
    #[inline(always)]
    pub fn done(&mut self) {
        self.finalize()
    }

    /// Render the format with the current state
    pub fn render(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            if self.debug {
                token.describe(&mut out);
            } else {
                token.render(&self.state, &self.context, &mut out);
            }
        }
        out
    }

    /// If the bar is finalized
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn progress(&self) -> u64 {
        self.state.progress
    }

    pub fn total(&self) -> u64 {
        self.state.total
    }

    /// Units per second at the last update, 0 if unknown
    pub fn rate(&self) -> f64 {
        self.state.estimater.rate()
    }

    /// Estimated remaining time at the last update, `None` if unknown
    pub fn eta(&self) -> Option<Duration> {
        self.state.estimater.eta()
    }

    /// When the work started
    pub fn started_at(&self) -> Instant {
        self.state.estimater.start()
    }

    /// The format template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The compiled format
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The current context
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Interrupt lines remembered by the bar, most recent first
    pub fn history(&self) -> &VecDeque<String> {
        self.lines.history()
    }

    /// Number of interrupt lines currently displayed above the bar
    pub fn cursor_row(&self) -> usize {
        self.lines.cursor_row()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    fn recompile(&mut self) {
        self.tokens = format::tokenize(&self.template, self.context.custom_verbs());
        log::debug!("compiled format into {} tokens", self.tokens.len());
    }

    fn write(&mut self) {
        let rendered = self.render();
        self.output.clear_line();
        self.output.write_formatted(format_args!("{rendered}"));
        self.output.flush();
    }

    fn can_update(&self, method: &str) -> bool {
        if self.closed {
            log::warn!("attempted to call {method} on a closed bar, the call is ignored");
            return false;
        }
        true
    }
}

/// Types that can be used as progress values
pub trait IntoProgress {
    fn into_progress(self) -> u64;
}
#[rustfmt::skip]
const _: () = {
    impl IntoProgress for u64 { #[inline(always)] fn into_progress(self) -> u64 { self } }
    impl IntoProgress for u32 { #[inline(always)] fn into_progress(self) -> u64 { self.into() } }
    impl IntoProgress for u16 { #[inline(always)] fn into_progress(self) -> u64 { self.into() } }
    impl IntoProgress for u8 { #[inline(always)] fn into_progress(self) -> u64 { self.into() } }
    impl IntoProgress for usize { #[inline(always)] fn into_progress(self) -> u64 { self as u64 } }
};
