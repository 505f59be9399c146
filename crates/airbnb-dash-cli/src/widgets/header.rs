//! Header widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render the application header with the dataset size
pub fn render_header(frame: &mut Frame, area: Rect, total_listings: usize) {
    let accent = theme::accent();
    let subtle = theme::subtle();

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("\u{2302}", Style::default().fg(accent)),
        Span::styled(" airbnb", Style::default().fg(theme::text()).bold()),
        Span::styled("-dash ", Style::default().fg(accent).bold()),
        Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(subtle),
        ),
        Span::styled("\u{2502} ", Style::default().fg(subtle)),
        Span::styled(
            format!("Airbnb Listings Dashboard ({} listings)", total_listings),
            Style::default().fg(subtle).italic(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(title, area);
}
