//! Tab bar widget for navigation

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme;

/// Render a tab bar with the given labels and selected index
///
/// Tabs are numbered from 1 to match their shortcut keys.
pub fn render_tabs(frame: &mut Frame, area: Rect, labels: &[&str], selected: usize) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(theme::accent()).bold()
        } else {
            Style::default().fg(theme::subtle())
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, label), style));
        spans.push(Span::raw("    "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}
