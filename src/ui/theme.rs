//! Color theme constants for the gist browser.

use ratatui::style::Color;

/// Title bar foreground
pub const COLOR_TITLE_FG: Color = Color::Indexed(230);

/// Title bar background
pub const COLOR_TITLE_BG: Color = Color::Indexed(62);

/// Secondary text (item details, footer hints)
pub const COLOR_DIM: Color = Color::Indexed(241);

/// Selected item marker and title
pub const COLOR_ACCENT: Color = Color::Indexed(170);

/// Loading spinner
pub const COLOR_SPINNER: Color = Color::Indexed(205);

/// Success status
pub const COLOR_SUCCESS: Color = Color::Indexed(42);

/// Error status
pub const COLOR_ERROR: Color = Color::Indexed(196);

/// Marker for gists with a visibility change in flight
pub const COLOR_PENDING: Color = Color::Yellow;
