//! STATISTICS and ANALYSIS views: filter sidebar and chart grid

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use airbnb_dash_core::ChartRenderer;

use crate::app::App;
use crate::theme;
use crate::widgets::{render_filter_panel, FrameRenderer};

/// Width of the filter sidebar
const SIDEBAR_WIDTH: u16 = 34;

/// Charts per grid row
const GRID_COLUMNS: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_filter_panel(frame, chunks[0], &app.dataset, &app.filter, &app.panel);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(chunks[1]);

    let summary = Line::from(vec![
        Span::styled(
            format!(" Showing {} of {} listings", app.rendered.matched, app.rendered.total),
            Style::default().fg(theme::text()).bold(),
        ),
        Span::styled(
            format!("  \u{2502}  {}", app.filter.summary(&app.dataset)),
            Style::default().fg(theme::subtle()),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary), right[0]);

    render_grid(frame, right[1], app);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let charts = &app.rendered.charts;
    let grid_rows = charts.len().div_ceil(GRID_COLUMNS);
    if grid_rows == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, grid_rows as u32); grid_rows])
        .split(area);

    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row)
                .to_vec()
        })
        .collect();

    let focused = (!app.panel.focused).then_some(app.selected_chart);
    FrameRenderer::new(frame, cells, focused).render_all(charts);
}
