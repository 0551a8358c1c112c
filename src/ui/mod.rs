//! Rendering for the interactive session.
//!
//! Layout, top to bottom: title bar, list (or loading view), a blank row,
//! and the status line. Rendering reads [`App`] and never mutates it.

mod helpers;
mod list;
mod status_bar;
mod theme;

pub use helpers::{item_details, spinner_frame, truncate_to_width, SPINNER_FRAMES};
pub use theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // List
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Status
        ])
        .split(frame.area());

    list::render_title(frame, chunks[0], app);
    if app.is_loading() {
        list::render_loading(frame, chunks[2], app);
    } else {
        list::render_list(frame, chunks[2], app);
    }
    status_bar::render_status_bar(frame, chunks[4], app);
}
