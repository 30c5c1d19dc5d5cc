//! Terminal colours for the chart segments.

use ansi_term::Colour;

/// Palette cycled over the status labels (first = planned-looking green).
const PALETTE: [Colour; 6] = [
    Colour::Green,
    Colour::Red,
    Colour::Yellow,
    Colour::Cyan,
    Colour::Purple,
    Colour::Blue,
];

pub fn segment_colour(index: usize) -> Colour {
    PALETTE[index % PALETTE.len()]
}

/// `n` copies of `glyph` painted with the segment colour.
pub fn paint_segment(index: usize, glyph: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    segment_colour(index).paint(glyph.repeat(n)).to_string()
}

/// Green for planned rows, default otherwise.
pub fn colorize_status(status: &str, planned: bool) -> String {
    if planned {
        Colour::Green.paint(status).to_string()
    } else {
        status.to_string()
    }
}
