//! Export dialog overlay

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use airbnb_dash_core::ExportFormat;

use super::centered_rect;
use crate::app::App;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let dialog_area = centered_rect(60, 13, area);
    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Export {} charts", app.view),
            Style::default().fg(theme::accent()).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("Select format:", Style::default().fg(theme::subtle()))),
    ];

    for (i, format) in ExportFormat::ALL.iter().enumerate() {
        let selected = i == app.export.selected_format;
        let style = if selected {
            Style::default().fg(theme::accent()).bold()
        } else {
            Style::default().fg(theme::text())
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, style),
            Span::styled(format.to_string(), style),
            Span::styled(
                format!("  {}", app.export_path(*format).display()),
                Style::default().fg(theme::subtle()),
            ),
        ]));
    }

    lines.push(Line::from(""));
    match &app.export.result_message {
        Some(message) => {
            let color = if app.export.export_success {
                theme::success()
            } else {
                theme::error()
            };
            lines.push(Line::from(Span::styled(message.clone(), Style::default().fg(color))));
        }
        None => lines.push(Line::from(Span::styled(
            "Press Enter to export, Esc to cancel",
            Style::default().fg(theme::subtle()),
        ))),
    }

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled(" Export ", Style::default().fg(theme::accent()).bold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::accent())),
    );
    frame.render_widget(dialog, dialog_area);
}
