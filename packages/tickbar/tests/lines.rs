mod common;
use common::*;

use tickbar::{HISTORY_CAPACITY, LineWidth, TermOutput};

fn interrupts(bar: &mut tickbar::Bar<Screen>, lines: &[&str]) {
    for line in lines {
        bar.interrupt(line);
    }
}

#[test]
fn test_single_line_mode_scrolls() {
    let mut bar = screen_bar(10, 0);
    bar.tick();
    interrupts(&mut bar, &["a", "b"]);
    assert_eq!(bar.output().rows(), ["a", "b", "BAR"]);
    assert_eq!(bar.cursor_row(), 0);
    assert!(bar.history().is_empty());
    assert_eq!(bar.output().moved_up, 0);
}

#[test]
fn test_block_grows_until_full() {
    let mut bar = screen_bar(10, 3);
    interrupts(&mut bar, &["a", "b"]);
    assert_eq!(bar.output().rows(), ["a", "b", "BAR"]);
    assert_eq!(bar.cursor_row(), 2);
    assert_eq!(bar.history(), &["b", "a"]);
}

#[test]
fn test_full_block_keeps_latest() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    let screen = bar.output();
    assert_eq!(screen.above(2), ["b", "c"]);
    assert_eq!(screen.current(), "BAR");
    assert_eq!(bar.cursor_row(), 2);
    assert_eq!(bar.history(), &["c", "b", "a"]);
}

#[test]
fn test_multi_line_interrupt() {
    let mut bar = screen_bar(10, 2);
    bar.interrupt("x\ny\nz");
    assert_eq!(bar.output().rows(), ["y", "z", "BAR"]);
    assert_eq!(bar.history(), &["z", "y", "x"]);
}

#[test]
fn test_trailing_newline_is_ignored() {
    let mut bar = screen_bar(10, 2);
    bar.interrupt("done\n");
    assert_eq!(bar.output().rows(), ["done", "BAR"]);
    assert_eq!(bar.history(), &["done"]);
    // only one is ignored
    bar.interrupt("next\r\n\n");
    assert_eq!(bar.output().rows(), ["next", "", "BAR"]);
    assert_eq!(bar.history(), &["", "next", "done"]);
}

#[test]
fn test_interrupt_macro() {
    let mut bar = screen_bar(10, 1);
    for i in 0..3 {
        tickbar::interrupt!(bar, "step {i}");
    }
    assert_eq!(bar.output().above(1), ["step 2"]);
    assert_eq!(bar.history(), &["step 2", "step 1", "step 0"]);
}

#[test]
fn test_history_is_bounded() {
    let mut bar = screen_bar(10, 3);
    for i in 0..25 {
        bar.interrupt(&format!("line {i}"));
    }
    let history = bar.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0], "line 24");
    assert_eq!(history[HISTORY_CAPACITY - 1], "line 5");
    assert_eq!(bar.output().above(3), ["line 22", "line 23", "line 24"]);
}

#[test]
fn test_grow_reveals_history() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    bar.set_lines(3);
    assert_eq!(bar.lines(), 3);
    assert_eq!(bar.cursor_row(), 3);
    assert_eq!(bar.output().rows(), ["a", "b", "c", "BAR"]);
}

#[test]
fn test_set_lines_twice_is_same_screen() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    bar.set_lines(3);
    let once: Vec<String> = bar.output().rows().into_iter().map(String::from).collect();
    let cursor = bar.output().cursor();
    bar.set_lines(3);
    assert_eq!(bar.output().rows(), once);
    assert_eq!(bar.output().cursor(), cursor);
    assert_eq!(bar.cursor_row(), 3);
}

#[test]
fn test_grow_past_history_pads_blank() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    bar.set_lines(3);
    bar.set_lines(5);
    assert_eq!(bar.output().rows(), ["", "", "a", "b", "c", "BAR"]);
    assert_eq!(bar.cursor_row(), 5);
}

#[test]
fn test_shrink_leaves_top_rows() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    bar.set_lines(1);
    assert_eq!(bar.cursor_row(), 1);
    assert_eq!(bar.output().rows(), ["b", "c", "BAR"]);
    bar.interrupt("d");
    assert_eq!(bar.output().rows(), ["b", "d", "BAR"]);
    assert_eq!(bar.history(), &["d", "c", "b", "a"]);
}

#[test]
fn test_shrink_to_single_line() {
    let mut bar = screen_bar(10, 2);
    interrupts(&mut bar, &["a", "b", "c"]);
    bar.set_lines(0);
    assert_eq!(bar.cursor_row(), 0);
    bar.interrupt("d");
    assert_eq!(bar.output().rows(), ["b", "c", "d", "BAR"]);
    assert_eq!(bar.history(), &["c", "b", "a"]);
}

#[test]
fn test_lines_are_capped() {
    let mut bar = screen_bar(10, 100);
    assert_eq!(bar.lines(), HISTORY_CAPACITY);
    bar.set_lines(HISTORY_CAPACITY + 1);
    assert_eq!(bar.lines(), HISTORY_CAPACITY);
}

#[test]
fn test_term_output_with_controls() {
    let mut bar = tickbar::bar(10)
        .format("BAR")
        .lines(1)
        .build_with(TermOutput::new(Vec::new()));
    bar.tick();
    bar.interrupt("a");
    bar.interrupt("b");
    let written = String::from_utf8_lossy(bar.output().get_ref()).to_string();
    assert_eq!(
        written,
        "\r\x1b[KBAR\r\x1b[Ka\n\r\x1b[KBAR\x1b[F\r\x1b[Kb\n\r\x1b[KBAR"
    );
}

#[test]
fn test_term_output_without_controls() {
    let output = TermOutput::new(Vec::new())
        .controls(false)
        .width(LineWidth::Fixed(2));
    let mut bar = tickbar::bar(10).format("BAR").lines(2).build_with(output);
    bar.tick();
    bar.interrupt("msg");
    bar.set_lines(3);
    assert_eq!(bar.cursor_row(), 0);
    assert!(bar.history().is_empty());
    bar.done();
    let written = String::from_utf8_lossy(bar.output().get_ref()).to_string();
    assert_eq!(written, "BA\nms\nBA\nBA\nBA\n");
}
