//! Footer widget with keyboard hints

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// Render the footer with keyboard hints and an optional status message
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], status: Option<&str>) {
    let accent = theme::accent();
    let text = theme::text();

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(accent)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(text)));
    }

    if let Some(status) = status {
        spans.push(Span::styled("   \u{2502} ", Style::default().fg(theme::subtle())));
        spans.push(Span::styled(status.to_string(), Style::default().fg(theme::warning())));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::border())),
        );

    frame.render_widget(footer, area);
}
