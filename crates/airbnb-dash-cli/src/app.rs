//! Application state and key handling

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use airbnb_dash_core::{
    render_view, Config, DashboardRequest, Dataset, ExportFormat, FilterSpec, RenderedView, View,
};

use crate::event;
use crate::screens;
use crate::theme;
use crate::widgets::{FilterPanelState, FilterSection};

/// Number of steps across the full price range
const PRICE_STEPS: f64 = 50.0;

/// State for export dialog
#[derive(Debug, Clone, Default)]
pub struct ExportState {
    /// Whether the export dialog is open
    pub dialog_open: bool,
    /// Index into [`ExportFormat::ALL`]
    pub selected_format: usize,
    /// Result message after export attempt
    pub result_message: Option<String>,
    /// Whether the last export was successful
    pub export_success: bool,
}

impl ExportState {
    pub fn format(&self) -> ExportFormat {
        ExportFormat::ALL[self.selected_format % ExportFormat::ALL.len()]
    }
}

/// Main application state
pub struct App {
    pub dataset: Dataset,
    pub config: Config,
    pub view: View,
    /// Selections shared by the STATISTICS and ANALYSIS views
    pub filter: FilterSpec,
    /// Charts of the current view, recomputed after every change
    pub rendered: RenderedView,
    pub panel: FilterPanelState,
    /// Chart with the highlight in the chart grid
    pub selected_chart: usize,
    pub show_help: bool,
    pub export: ExportState,
    /// Directory exports are written to
    pub export_dir: PathBuf,
    pub status_message: Option<String>,
    /// Save config changes to disk
    pub persist_config: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(dataset: Dataset, config: Config) -> Self {
        let view = config.default_view;
        let filter = FilterSpec::all(&dataset);
        let request = DashboardRequest::new(view, &dataset)
            .with_filter(filter.clone())
            .with_top_n(config.top_n);
        let rendered = render_view(&dataset, &request);

        Self {
            dataset,
            config,
            view,
            filter,
            rendered,
            panel: FilterPanelState::default(),
            selected_chart: 0,
            show_help: false,
            export: ExportState::default(),
            export_dir: PathBuf::from("."),
            status_message: None,
            persist_config: true,
            should_quit: false,
        }
    }

    /// Snapshot of the current view and selections
    pub fn request(&self) -> DashboardRequest {
        DashboardRequest::new(self.view, &self.dataset)
            .with_filter(self.filter.clone())
            .with_top_n(self.config.top_n)
    }

    /// Recompute the charts of the current view
    fn refresh(&mut self) {
        self.rendered = render_view(&self.dataset, &self.request());
        self.selected_chart = self
            .selected_chart
            .min(self.rendered.charts.len().saturating_sub(1));
    }

    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }

    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        tracing::debug!("Switching to {}", view);
        self.view = view;
        self.selected_chart = 0;
        if !view.has_filters() {
            self.panel.focused = false;
        }
        self.refresh();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Help overlay - any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.export.dialog_open {
            self.handle_export_key(key);
            return;
        }

        if event::is_quit(&key) {
            self.should_quit = true;
            return;
        }

        if event::is_help(&key) {
            self.show_help = true;
            return;
        }

        if let Some(index) = event::digit_index(&key) {
            if let Some(view) = View::ALL.get(index) {
                self.set_view(*view);
            }
            return;
        }

        if self.panel.focused {
            self.handle_filter_key(key);
        } else {
            self.handle_chart_key(key);
        }
    }

    fn handle_chart_key(&mut self, key: KeyEvent) {
        let charts = self.rendered.charts.len();

        if event::is_tab(&key) {
            self.set_view(self.view.next());
        } else if event::is_back_tab(&key) {
            self.set_view(self.view.prev());
        } else if event::is_key(&key, 'f') && self.view.has_filters() {
            self.panel.focused = true;
        } else if (event::is_down(&key) || event::is_right(&key)) && charts > 0 {
            self.selected_chart = (self.selected_chart + 1) % charts;
        } else if (event::is_up(&key) || event::is_left(&key)) && charts > 0 {
            self.selected_chart = (self.selected_chart + charts - 1) % charts;
        } else if event::is_key(&key, 'r') && self.view.has_filters() {
            self.reset_filters();
        } else if event::is_key(&key, 'e') && !self.rendered.charts.is_empty() {
            self.export = ExportState {
                dialog_open: true,
                ..ExportState::default()
            };
        } else if event::is_key(&key, 't') {
            self.cycle_theme();
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        if event::is_escape(&key) || event::is_key(&key, 'f') {
            self.panel.focused = false;
        } else if event::is_tab(&key) {
            self.panel.next_section();
        } else if event::is_back_tab(&key) {
            self.panel.prev_section();
        } else if event::is_ctrl_a(&key) {
            if let Some(column) = self.panel.column() {
                self.filter.select_all(column, &self.dataset);
                self.refresh();
            }
        } else if event::is_ctrl_d(&key) {
            if let Some(column) = self.panel.column() {
                self.filter.clear(column);
                self.refresh();
            }
        } else if event::is_key(&key, 'r') {
            self.reset_filters();
        } else {
            match self.panel.section {
                FilterSection::Column(_) => self.handle_picker_key(key),
                FilterSection::PriceMin | FilterSection::PriceMax => self.handle_price_key(key),
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(column) = self.panel.column() else {
            return;
        };
        let values = self.dataset.distinct(column);

        if event::is_down(&key) {
            self.panel.move_cursor(1, values.len());
        } else if event::is_up(&key) {
            self.panel.move_cursor(-1, values.len());
        } else if event::is_space(&key) || event::is_enter(&key) {
            let cursor = self.panel.cursor().unwrap_or(0);
            if let Some(value) = values.get(cursor) {
                self.filter.toggle(column, value);
                self.refresh();
            }
        }
    }

    fn handle_price_key(&mut self, key: KeyEvent) {
        let direction = if event::is_right(&key) || event::is_up(&key) {
            1.0
        } else if event::is_left(&key) || event::is_down(&key) {
            -1.0
        } else {
            return;
        };
        self.step_price(direction);
    }

    /// Move the bound under the cursor one step up or down
    fn step_price(&mut self, direction: f64) {
        let bounds = self.dataset.price_range();
        let step = ((bounds.1 - bounds.0) / PRICE_STEPS).ceil().max(1.0);
        let (mut min, mut max) = (self.filter.price_min, self.filter.price_max);
        match self.panel.section {
            FilterSection::PriceMin => min += step * direction,
            FilterSection::PriceMax => max += step * direction,
            FilterSection::Column(_) => return,
        }
        // Keep the other bound fixed when the moving one would cross it
        match self.panel.section {
            FilterSection::PriceMin => min = min.min(max),
            _ => max = max.max(min),
        }
        self.filter.set_price_range(min, max, bounds);
        self.refresh();
    }

    fn reset_filters(&mut self) {
        self.filter = FilterSpec::all(&self.dataset);
        self.status_message = Some("Filters reset".to_string());
        self.refresh();
    }

    fn cycle_theme(&mut self) {
        let next = theme::current_theme_name().next();
        theme::set_theme(next);
        self.config.theme = next;
        self.status_message = Some(format!("Theme: {}", next));

        if self.persist_config {
            if let Err(e) = self.config.save() {
                tracing::warn!("Failed to save config: {}", e);
                self.status_message = Some(format!("Theme: {} (not saved)", next));
            }
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        let formats = ExportFormat::ALL.len();

        if event::is_escape(&key) {
            self.export.dialog_open = false;
        } else if event::is_up(&key) {
            self.export.selected_format = (self.export.selected_format + formats - 1) % formats;
        } else if event::is_down(&key) {
            self.export.selected_format = (self.export.selected_format + 1) % formats;
        } else if event::is_enter(&key) {
            self.run_export();
        }
    }

    /// Path the current view is exported to in `format`
    pub fn export_path(&self, format: ExportFormat) -> PathBuf {
        self.export_dir.join(format!(
            "airbnb-{}.{}",
            self.view.name().to_lowercase(),
            format.extension()
        ))
    }

    fn run_export(&mut self) {
        let format = self.export.format();
        let path = self.export_path(format);
        match format.export(&self.rendered, &path) {
            Ok(()) => {
                self.export.export_success = true;
                self.export.result_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.export.export_success = false;
                self.export.result_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Footer hints for the current state
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.export.dialog_open {
            return vec![("\u{2191}\u{2193}", "Format"), ("Enter", "Export"), ("Esc", "Close")];
        }
        if self.panel.focused {
            return vec![
                ("Tab", "Section"),
                ("Space", "Toggle"),
                ("^A/^D", "All/None"),
                ("\u{2190}\u{2192}", "Price"),
                ("r", "Reset"),
                ("Esc", "Charts"),
            ];
        }
        let mut hints = vec![("1-3/Tab", "View")];
        if self.view.has_filters() {
            hints.extend([("f", "Filters"), ("\u{2191}\u{2193}", "Chart"), ("e", "Export")]);
        }
        hints.extend([("t", "Theme"), ("?", "Help"), ("q", "Quit")]);
        hints
    }
}
