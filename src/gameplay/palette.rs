use colored::Color;

/// Colors cycled through to tell players apart in traces.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Color for the player at the given seat, wrapping past the palette.
pub fn paint(seat: usize) -> Color {
    PALETTE[seat % PALETTE.len()]
}
