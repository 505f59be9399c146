//! Help overlay showing keyboard shortcuts

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let modal_area = centered_rect(48, 26, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().fg(theme::accent()).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::accent()));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        section("Views"),
        shortcut_line("1 / 2 / 3", "HOME / STATISTICS / ANALYSIS"),
        shortcut_line("Tab / Shift+Tab", "Next / previous view"),
        shortcut_line("\u{2191}/\u{2193} or j/k", "Highlight chart"),
        shortcut_line("e", "Export current view"),
        Line::from(""),
        section("Filters"),
        shortcut_line("f", "Focus filter sidebar"),
        shortcut_line("Tab / Shift+Tab", "Next / previous section"),
        shortcut_line("Space / Enter", "Toggle value"),
        shortcut_line("Ctrl+A / Ctrl+D", "Select all / none"),
        shortcut_line("\u{2190}/\u{2192}", "Adjust price bound"),
        shortcut_line("r", "Reset all filters"),
        shortcut_line("Esc", "Back to charts"),
        Line::from(""),
        section("General"),
        shortcut_line("t", "Cycle theme"),
        shortcut_line("?", "This help screen"),
        shortcut_line("q", "Quit application"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme::accent()));
    frame.render_widget(separator, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme::subtle()).italic(),
    )))
    .alignment(Alignment::Center);
    let footer_area = Rect::new(chunks[1].x, chunks[1].y + 1, chunks[1].width, 1);
    frame.render_widget(footer, footer_area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme::accent()).bold(),
    ))
}

fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<18}", key), Style::default().fg(theme::text())),
        Span::styled(description.to_string(), Style::default().fg(theme::subtle())),
    ])
}
