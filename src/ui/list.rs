//! Gist list, title bar and loading view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Gist;

use super::helpers::{item_details, spinner_frame, truncate_to_width};
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_PENDING, COLOR_SPINNER, COLOR_TITLE_BG, COLOR_TITLE_FG,
};

const TITLE: &str = "Gist Manager";

/// Columns taken by the selection marker
const MARKER_WIDTH: usize = 2;

const PENDING_MARKER: &str = " ⟳";
/// Columns taken by [`PENDING_MARKER`]
const PENDING_WIDTH: usize = 2;

/// Title bar: application name and item count.
pub fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(COLOR_TITLE_FG)
        .bg(COLOR_TITLE_BG)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(format!(" {} ", TITLE), title_style)];
    if !app.is_loading() {
        spans.push(Span::styled(
            format!("  {} items", app.gists.len()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            spinner_frame(app.tick_count),
            Style::default().fg(COLOR_SPINNER),
        ),
        Span::raw(" Loading gists..."),
    ]);
    let padded = Rect {
        x: area.x + 2,
        y: area.y + 1.min(area.height.saturating_sub(1)),
        width: area.width.saturating_sub(2),
        height: area.height.min(1),
    };
    frame.render_widget(Paragraph::new(line), padded);
}

/// Items are a title line, a visibility/files/date line and a blank spacer.
pub fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.gists.is_empty() {
        let hint = Paragraph::new("No gists. Press [r] to refresh.")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Left);
        frame.render_widget(hint, area);
        return;
    }

    let width = area.width as usize;
    let items: Vec<ListItem> = app
        .gists
        .iter()
        .enumerate()
        .map(|(i, gist)| list_item(gist, i == app.selected, app.is_toggle_pending(&gist.id), width))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}

fn list_item(gist: &Gist, selected: bool, pending: bool, width: usize) -> ListItem<'static> {
    let text_width = width.saturating_sub(MARKER_WIDTH);

    let (marker, title_style) = if selected {
        (
            Span::styled("│ ", Style::default().fg(COLOR_ACCENT)),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default())
    };

    let title_width = if pending {
        text_width.saturating_sub(PENDING_WIDTH)
    } else {
        text_width
    };
    let mut title = vec![
        marker.clone(),
        Span::styled(truncate_to_width(gist.title(), title_width), title_style),
    ];
    if pending {
        title.push(Span::styled(PENDING_MARKER, Style::default().fg(COLOR_PENDING)));
    }

    let details = Line::from(vec![
        marker,
        Span::styled(
            truncate_to_width(&item_details(gist), text_width),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    ListItem::new(vec![Line::from(title), details, Line::default()])
}
