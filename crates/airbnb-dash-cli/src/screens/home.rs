//! HOME view: project description and a dataset overview

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use airbnb_dash_core::dashboard::HOME_SECTIONS;
use airbnb_dash_core::CategoryColumn;

use crate::app::App;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .margin(1)
        .split(area);

    let mut lines = Vec::new();
    for (heading, body) in HOME_SECTIONS {
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().fg(theme::accent()).bold(),
        )));
        lines.push(Line::from(Span::styled(body, Style::default().fg(theme::text()))));
        lines.push(Line::from(""));
    }

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::border())),
        );
    frame.render_widget(about, chunks[0]);

    render_overview(frame, chunks[1], app);
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let (lo, hi) = app.dataset.price_range();
    let stat = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(theme::subtle())),
            Span::styled(value, Style::default().fg(theme::text()).bold()),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        stat("Listings", app.dataset.len().to_string()),
    ];
    for column in CategoryColumn::FILTERABLE {
        let label = match column {
            CategoryColumn::Country => "Countries",
            CategoryColumn::PropertyType => "Property types",
            CategoryColumn::RoomType => "Room types",
            CategoryColumn::HostName => "Hosts",
        };
        lines.push(stat(label, app.dataset.distinct(column).len().to_string()));
    }
    lines.push(stat("Price range", format!("{:.0} - {:.0}", lo, hi)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 2 or 3 to explore the charts",
        Style::default().fg(theme::accent_secondary()).italic(),
    )));

    let overview = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Dataset ", Style::default().fg(theme::accent()).bold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::border())),
    );
    frame.render_widget(overview, area);
}
