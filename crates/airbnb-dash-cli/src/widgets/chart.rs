//! Terminal rendering of computed charts

use ratatui::prelude::*;
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Paragraph, Row, Table,
};

use airbnb_dash_core::chart::truncate_str;
use airbnb_dash_core::{AggregateOp, Chart, ChartKind, ChartRenderer};

use crate::theme;

/// Bar values are integers; means keep two decimals of precision
const MEAN_SCALE: f64 = 100.0;

/// Render one chart into `area`
///
/// A chart without rows shows an empty frame with a placeholder.
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &Chart, focused: bool) {
    let border = if focused { theme::accent() } else { theme::border() };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", chart.spec.title),
            Style::default().fg(theme::accent()).bold(),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} by {} ", chart.spec.value_label, chart.spec.key_label),
            Style::default().fg(theme::subtle()),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    if chart.data.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "(no data)",
            Style::default().fg(theme::subtle()).italic(),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    match chart.spec.kind {
        ChartKind::BarHorizontal => render_bars(frame, area, chart, block, Direction::Horizontal),
        ChartKind::BarVertical => render_bars(frame, area, chart, block, Direction::Vertical),
        ChartKind::Pie => render_pie(frame, area, chart, block),
        ChartKind::Choropleth | ChartKind::ScatterGeo => render_geo(frame, area, chart, block),
    }
}

/// Draws charts into a fixed list of cells, one chart per cell
///
/// Charts beyond the last cell are skipped.
pub struct FrameRenderer<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cells: Vec<Rect>,
    next: usize,
    focused: Option<usize>,
}

impl<'a, 'f> FrameRenderer<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, cells: Vec<Rect>, focused: Option<usize>) -> Self {
        Self {
            frame,
            cells,
            next: 0,
            focused,
        }
    }
}

impl ChartRenderer for FrameRenderer<'_, '_> {
    type Output = ();

    fn render(&mut self, chart: &Chart) {
        let index = self.next;
        self.next += 1;
        if let Some(area) = self.cells.get(index) {
            render_chart(self.frame, *area, chart, self.focused == Some(index));
        }
    }
}

fn bar_value(op: AggregateOp, value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    match op {
        AggregateOp::Count => value.round() as u64,
        AggregateOp::Mean(_) => (value * MEAN_SCALE).round() as u64,
    }
}

/// Position of `value` between zero and the chart maximum
fn intensity(chart: &Chart, value: f64) -> f64 {
    match chart.data.max_value() {
        Some(max) if max > 0.0 && value.is_finite() => value / max,
        _ => 0.0,
    }
}

fn render_bars(frame: &mut Frame, area: Rect, chart: &Chart, block: Block, direction: Direction) {
    let inner = block.inner(area);
    let rows = &chart.data.rows;
    let label_width = match direction {
        Direction::Horizontal => (inner.width / 3).max(8) as usize,
        Direction::Vertical => {
            let per_bar = inner.width / rows.len().max(1) as u16;
            per_bar.saturating_sub(1).clamp(3, 16) as usize
        }
    };

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            let color = theme::scale_color(chart.spec.color_scale, intensity(chart, row.value));
            Bar::default()
                .value(bar_value(chart.data.op, row.value))
                .text_value(chart.format_value(row.value))
                .label(Line::from(truncate_str(&row.label(), label_width)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let mut widget = BarChart::default()
        .block(block)
        .direction(direction)
        .data(BarGroup::default().bars(&bars))
        .label_style(Style::default().fg(theme::text()));

    widget = match direction {
        Direction::Horizontal => widget.bar_width(1).bar_gap(0),
        Direction::Vertical => widget.bar_width(label_width as u16).bar_gap(1),
    };

    frame.render_widget(widget, area);
}

fn render_pie(frame: &mut Frame, area: Rect, chart: &Chart, block: Block) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = chart.data.total();
    let share = |value: f64| {
        if total > 0.0 && value.is_finite() {
            value / total
        } else {
            0.0
        }
    };

    // Stacked bar standing in for the pie
    let width = inner.width.saturating_sub(2) as usize;
    let mut stacked: Vec<Span> = vec![Span::raw(" ")];
    let mut used = 0;
    for (i, row) in chart.data.rows.iter().enumerate() {
        let len = if i + 1 == chart.data.len() {
            width.saturating_sub(used)
        } else {
            ((share(row.value) * width as f64).round() as usize).min(width - used)
        };
        used += len;
        stacked.push(Span::styled(
            "\u{2588}".repeat(len),
            Style::default().fg(theme::category_color(chart.spec.color_scale, i)),
        ));
    }

    let mut lines = vec![Line::from(stacked), Line::from("")];
    if chart.spec.show_legend {
        let key_width = (inner.width / 2).max(8) as usize;
        for (i, row) in chart.data.rows.iter().enumerate() {
            let color = theme::category_color(chart.spec.color_scale, i);
            lines.push(Line::from(vec![
                Span::styled(" \u{25CF} ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<w$}", truncate_str(&row.label(), key_width), w = key_width),
                    Style::default().fg(theme::text()),
                ),
                Span::styled(
                    format!(" {:>5.1}%", share(row.value) * 100.0),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(
                    format!("  {}", chart.format_value(row.value)),
                    Style::default().fg(theme::subtle()),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn geo_marker(kind: ChartKind, t: f64) -> &'static str {
    match kind {
        ChartKind::Choropleth => "\u{2588}\u{2588}\u{2588}\u{2588}",
        _ if t >= 0.66 => "\u{2B24}",
        _ if t >= 0.33 => "\u{25CF}",
        _ => "\u{2022}",
    }
}

fn render_geo(frame: &mut Frame, area: Rect, chart: &Chart, block: Block) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(chart.spec.key_label.clone()),
        Cell::from(chart.spec.value_label.clone()),
    ])
    .style(Style::default().fg(theme::accent()).bold());

    let rows: Vec<Row> = chart
        .data
        .rows
        .iter()
        .map(|row| {
            let t = intensity(chart, row.value);
            let color = theme::scale_color(chart.spec.color_scale, t);
            Row::new(vec![
                Cell::from(Span::styled(
                    geo_marker(chart.spec.kind, t),
                    Style::default().fg(color),
                )),
                Cell::from(row.label()),
                Cell::from(chart.format_value(row.value)),
            ])
            .style(Style::default().fg(theme::text()))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(55),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
