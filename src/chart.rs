//! Terminal bar charts.
//!
//! Renders a [`Tally`]'s `{labels, values}` pair as horizontal bars.
//! Rendering is best-effort presentation: when stdout is not a terminal
//! the caller should fall back to [`render_plain`] instead, and nothing
//! else in the application depends on charts being drawable.

use crate::tally::Tally;
use colored::Colorize;
use std::io::IsTerminal;

/// Maximum bar width in cells.
const BAR_WIDTH: u64 = 40;

/// Whether bar charts can be drawn on this stdout.
#[must_use]
pub fn is_available() -> bool {
    std::io::stdout().is_terminal()
}

/// Draw one axis tally as a titled horizontal bar chart.
///
/// Bars are proportional to the largest bucket; a zero total renders
/// every label with an empty bar.
pub fn render(title: &str, tally: &Tally) {
    println!("{}", title.bold());

    let max = tally.counts().into_iter().max().unwrap_or(0);
    let label_width = tally
        .labels()
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, count) in tally.iter() {
        let cells = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        #[allow(clippy::cast_possible_truncation)]
        let bar = "█".repeat(cells as usize);
        println!("  {label:<label_width$}  {} {count}", bar.cyan());
    }
    println!();
}

/// Plain-text fallback when charts are unavailable.
pub fn render_plain(title: &str, tally: &Tally) {
    println!("{title}");
    for (label, count) in tally.iter() {
        println!("  {label}: {count}");
    }
    println!();
}
