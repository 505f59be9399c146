//! Rendering sinks for computed charts

use super::model::{Chart, ChartKind};

/// Turns a computed chart into some visual artifact
///
/// Implementations must accept charts with no rows and produce an empty
/// visual instead of failing.
pub trait ChartRenderer {
    type Output;

    /// Render a single chart
    fn render(&mut self, chart: &Chart) -> Self::Output;

    /// Render several charts in order
    ///
    /// Default implementation calls `render` for each chart.
    fn render_all(&mut self, charts: &[Chart]) -> Vec<Self::Output> {
        charts.iter().map(|c| self.render(c)).collect()
    }
}

/// Plain-text renderer used by the headless CLI
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Width of the longest bar in characters
    pub bar_width: usize,
    /// Maximum key column width
    pub key_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bar_width: 30,
            key_width: 28,
        }
    }
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width,
            ..Self::default()
        }
    }

    fn bar(&self, value: f64, max: f64) -> String {
        if !value.is_finite() || max <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.bar_width as f64).round() as usize;
        "\u{2588}".repeat(len.min(self.bar_width))
    }
}

impl ChartRenderer for TextRenderer {
    type Output = String;

    fn render(&mut self, chart: &Chart) -> String {
        let mut out = format!("== {} ({}) ==\n", chart.spec.title, chart.spec.kind);

        if chart.data.is_empty() {
            out.push_str("  (no data)\n");
            return out;
        }

        let key_width = chart
            .data
            .rows
            .iter()
            .map(|r| r.label().chars().count())
            .max()
            .unwrap_or(0)
            .max(chart.spec.key_label.len())
            .min(self.key_width);

        out.push_str(&format!(
            "  {:<width$}  {}\n",
            chart.spec.key_label,
            chart.spec.value_label,
            width = key_width
        ));

        let max = chart.data.max_value().unwrap_or(0.0);
        let total = chart.data.total();

        for row in &chart.data.rows {
            let label = truncate_str(&row.label(), key_width);
            let value = chart.format_value(row.value);
            let detail = match chart.spec.kind {
                ChartKind::Pie if total > 0.0 && row.value.is_finite() => {
                    format!("{} ({:.1}%)", value, row.value / total * 100.0)
                }
                ChartKind::Pie | ChartKind::Choropleth | ChartKind::ScatterGeo => value,
                ChartKind::BarHorizontal | ChartKind::BarVertical => {
                    format!("{} {}", self.bar(row.value, max), value)
                }
            };
            out.push_str(&format!("  {:<width$}  {}\n", label, detail, width = key_width));
        }

        out
    }
}

/// Shorten `s` to at most `max_len` characters, marking the cut with `...`
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
