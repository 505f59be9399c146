//! Screen rendering and routing

mod dashboard;
mod export;
mod help;
mod home;

use ratatui::prelude::*;

use airbnb_dash_core::View;

use crate::app::App;
use crate::widgets;

/// Render the current view plus any open overlay
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    widgets::render_header(frame, chunks[0], app.dataset.len());

    let labels: Vec<&str> = View::ALL.iter().map(|v| v.name()).collect();
    widgets::render_tabs(frame, chunks[1], &labels, app.view.index());

    match app.view {
        View::Home => home::render(frame, chunks[2], app),
        View::Statistics | View::Analysis => dashboard::render(frame, chunks[2], app),
    }

    widgets::render_footer(
        frame,
        chunks[3],
        &app.hints(),
        app.status_message.as_deref(),
    );

    if app.export.dialog_open {
        export::render(frame, area, app);
    }
    if app.show_help {
        help::render(frame, area);
    }
}

/// Rectangle of at most `width` x `height` centered in `parent`
pub(crate) fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}
