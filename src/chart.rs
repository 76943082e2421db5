// Terminal bar chart: one line per week, one colored block per contribution.
// Blocks are grouped in bands of ten and each band takes the next palette
// color, wrapping around after the last one. With color off the glyphs are
// written bare, so redirected output stays free of escape codes.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::model::{ContributionCalendar, Week};

pub const PALETTE: [Color; 5] = [
    Color::Grey,
    Color::DarkGreen,
    Color::DarkBlue,
    Color::DarkYellow,
    Color::DarkRed,
];

/// Number of consecutive glyphs sharing one color.
pub const BAND_SIZE: u64 = 10;

/// Glyph token, including its trailing separator.
pub const GLYPH: &str = "■ ";

/// Color of the `index`-th glyph of a week (0-based).
pub fn band_color(index: u64) -> Color {
    let band = (index / BAND_SIZE) % PALETTE.len() as u64;
    PALETTE[band as usize]
}

/// Glyph run for a weekly total, styled when `color` is set.
pub fn glyphs(total: u64, color: bool) -> String {
    if !color {
        return GLYPH.repeat(total as usize);
    }
    (0..total)
        .map(|j| GLYPH.with(band_color(j)).to_string())
        .collect()
}

/// Render a week as `<first date>: <glyphs>`. A week without days has no
/// label and yields `None`; a zero total still yields the bare label.
pub fn render_week(week: &Week, color: bool) -> Option<String> {
    let date = week.first_date()?;
    Some(format!("{}: {}", date, glyphs(week.total(), color)))
}

/// Write one line per renderable week and return how many were written.
pub fn render_calendar<W: Write>(calendar: &ContributionCalendar, out: &mut W, color: bool) -> io::Result<usize> {
    let mut lines = 0;
    for line in calendar.weeks.iter().filter_map(|week| render_week(week, color)) {
        writeln!(out, "{}", line)?;
        lines += 1;
    }
    Ok(lines)
}
