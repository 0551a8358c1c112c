//! Bottom status line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, StatusKind, FOOTER_HINT};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Current status, or the key hints when there is none.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Neutral => COLOR_DIM,
                StatusKind::Success => COLOR_SUCCESS,
                StatusKind::Error => COLOR_ERROR,
            };
            (status.text.as_str(), color)
        }
        None => (FOOTER_HINT, COLOR_DIM),
    };

    let line = Line::styled(
        truncate_to_width(text, area.width as usize),
        Style::default().fg(color),
    );
    frame.render_widget(Paragraph::new(line), area);
}
