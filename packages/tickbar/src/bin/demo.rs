use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use tickbar::{ColorLevel, Glyphs, PrintLevel};

/// Draw a progress bar with interrupt lines printed above it
#[derive(Debug, Parser)]
struct Args {
    /// Number of steps
    #[clap(short, long, default_value_t = 40)]
    total: u64,
    /// Number of cells in the bar
    #[clap(short, long, default_value_t = 30)]
    width: usize,
    /// Initial number of interrupt lines kept above the bar
    #[clap(short, long, default_value_t = 0)]
    lines: usize,
    /// Grow the interrupt lines by one every this many steps. 0 to never grow
    #[clap(long, default_value_t = 10)]
    grow_every: u64,
    /// Time between steps
    #[clap(long, default_value_t = 100)]
    interval_ms: u64,
    /// Format template. `:step` is available as a custom verb
    #[clap(short, long, default_value = " step :step :bar :percent :rate/s ETA :eta ")]
    format: String,
    /// Draw the bar with ASCII characters
    #[clap(long)]
    ascii: bool,
    /// Verbose. More -v makes it more verbose (opposite of --quiet)
    #[clap(short = 'v', long, action(clap::ArgAction::Count))]
    verbose: u8,
    /// Quiet. More -q makes it more quiet (opposite of --verbose)
    #[clap(short = 'q', long, action(clap::ArgAction::Count))]
    quiet: u8,
    /// Set the color mode of log messages
    #[clap(long, default_value_t = ColorLevel::Auto)]
    color: ColorLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tickbar::init_logging(args.color, PrintLevel::from_flags(args.verbose, args.quiet));
    log::debug!("{args:?}");

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || interrupted.store(true, Ordering::Release))
            .context("failed to set ctrl-c handler")?;
    }

    let total = args.total;
    let glyphs = if args.ascii {
        Glyphs::ascii()
    } else {
        Glyphs::default()
    };
    let mut bar = tickbar::bar(total)
        .width(args.width)
        .glyphs(glyphs)
        .lines(args.lines)
        .format(args.format.as_str())
        .context(step_context(0)?)
        .on_done(move || log::info!("done with {total} steps"))
        .build();

    for step in 1..=total {
        if interrupted.load(Ordering::Acquire) {
            tickbar::interrupt!(bar, "interrupted at step {step}");
            break;
        }
        std::thread::sleep(Duration::from_millis(args.interval_ms));
        bar.tick_and_update(step_context(step)?);
        if step % 2 == 0 {
            tickbar::interrupt!(bar, "step {step} is even");
        }
        if args.grow_every > 0 && step % args.grow_every == 0 {
            let lines = bar.lines() + 1;
            log::debug!("growing to {lines} lines");
            bar.set_lines(lines);
        }
    }
    bar.done();
    Ok(())
}

fn step_context(step: u64) -> anyhow::Result<tickbar::Context> {
    let value = tickbar::ctx("step", step).context("failed to declare the step verb")?;
    Ok(tickbar::Context::new().with(value))
}
