//! Colour constants for the TUI.

use ratatui::style::Color;

use crate::model::palette::Rgb;
use crate::model::types::SourceId;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Highlight for the cheapest source row.
pub const CHEAPEST_FG: Color = Color::Green;
/// Advice bullet color.
pub const TIP_FG: Color = Color::Yellow;

/// Converts a palette entry to a terminal colour.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Colour used for a source label in the cost panel.
pub fn source_color(source: SourceId) -> Color {
    match source {
        SourceId::Grid => Color::Cyan,
        SourceId::Generator => Color::Red,
        SourceId::Solar => Color::Yellow,
    }
}
