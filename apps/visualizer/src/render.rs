//! Terminal and JSON-lines drawing of sort frames.

use std::{
    fmt::Write as _,
    io::{self, Write},
};

use shared::{
    domain::{BarState, SortSummary},
    protocol::{FrameSnapshot, SortEvent},
};
use sort_engine::{Frame, Renderer};

pub const BAR_ROWS: usize = 16;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
const BAR_GLYPH: char = '█';

fn color(state: BarState) -> &'static str {
    match state {
        BarState::Default => "\x1b[34m",
        BarState::Compare => "\x1b[33m",
        BarState::Swap => "\x1b[31m",
        BarState::Settled => "\x1b[32m",
    }
}

/// Rows of a bar chart scaled so the tallest value fills `BAR_ROWS`.
/// Any positive value keeps at least one row.
pub fn bar_heights(values: &[i64]) -> Vec<usize> {
    let tallest = values.iter().copied().max().unwrap_or(0).max(1);
    values
        .iter()
        .map(|&value| {
            if value <= 0 {
                0
            } else {
                let scaled = (value as u128 * BAR_ROWS as u128).div_ceil(tallest as u128);
                scaled as usize
            }
        })
        .collect()
}

pub fn draw_bars(frame: &FrameSnapshot, colored: bool) -> String {
    let heights = bar_heights(&frame.values);
    let mut out = String::new();

    for row in (1..=BAR_ROWS).rev() {
        let mut current: Option<BarState> = None;
        for (height, state) in heights.iter().zip(&frame.bars) {
            if *height >= row {
                if colored && current != Some(*state) {
                    out.push_str(color(*state));
                    current = Some(*state);
                }
                out.push(BAR_GLYPH);
            } else {
                out.push(' ');
            }
        }
        if colored && current.is_some() {
            out.push_str(RESET);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "comparisons: {}", frame.comparisons);
    out
}

pub fn describe_summary(summary: &SortSummary) -> String {
    format!(
        "{} sort: {} comparisons, {} swaps, {} steps, complexity {}",
        summary.algorithm, summary.comparisons, summary.swaps, summary.steps, summary.complexity
    )
}

pub fn event_json(event: &SortEvent) -> String {
    serde_json::to_string(event).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
}

/// Redraws the whole chart in place for every frame.
pub struct TerminalRenderer<W> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn draw(&mut self, frame: &FrameSnapshot) {
        let _ = write!(self.out, "{CLEAR_SCREEN}{}", draw_bars(frame, true));
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) {
        self.draw(&frame.snapshot());
    }
}

/// One `SortEvent` JSON object per line.
pub struct JsonRenderer<W> {
    out: W,
}

impl JsonRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, event: &SortEvent) {
        let _ = writeln!(self.out, "{}", event_json(event));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) {
        self.emit(&SortEvent::Frame(frame.snapshot()));
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
