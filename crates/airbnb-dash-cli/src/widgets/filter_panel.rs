//! Filter sidebar: value pickers for each filterable column plus a price range

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use airbnb_dash_core::{CategoryColumn, Dataset, FilterSpec};

use crate::theme;

/// Part of the sidebar holding the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSection {
    /// Picker for `CategoryColumn::FILTERABLE[i]`
    Column(usize),
    PriceMin,
    PriceMax,
}

impl Default for FilterSection {
    fn default() -> Self {
        FilterSection::Column(0)
    }
}

/// Cursor position inside the filter sidebar
#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    pub section: FilterSection,
    /// Cursor row per filterable column
    pub cursors: [usize; 3],
    /// Whether the sidebar has keyboard focus
    pub focused: bool,
}

impl FilterPanelState {
    /// Column under the cursor, if the cursor is in a picker
    pub fn column(&self) -> Option<CategoryColumn> {
        match self.section {
            FilterSection::Column(i) => CategoryColumn::FILTERABLE.get(i).copied(),
            _ => None,
        }
    }

    pub fn next_section(&mut self) {
        self.section = match self.section {
            FilterSection::Column(i) if i + 1 < CategoryColumn::FILTERABLE.len() => {
                FilterSection::Column(i + 1)
            }
            FilterSection::Column(_) => FilterSection::PriceMin,
            FilterSection::PriceMin => FilterSection::PriceMax,
            FilterSection::PriceMax => FilterSection::Column(0),
        };
    }

    pub fn prev_section(&mut self) {
        self.section = match self.section {
            FilterSection::Column(0) => FilterSection::PriceMax,
            FilterSection::Column(i) => FilterSection::Column(i - 1),
            FilterSection::PriceMin => FilterSection::Column(CategoryColumn::FILTERABLE.len() - 1),
            FilterSection::PriceMax => FilterSection::PriceMin,
        };
    }

    /// Move the cursor of the current picker by `delta`, clamped to `len` rows
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if let FilterSection::Column(i) = self.section {
            let max = len.saturating_sub(1) as isize;
            let next = (self.cursors[i] as isize + delta).clamp(0, max.max(0));
            self.cursors[i] = next as usize;
        }
    }

    /// Cursor row of the current picker
    pub fn cursor(&self) -> Option<usize> {
        match self.section {
            FilterSection::Column(i) => Some(self.cursors[i]),
            _ => None,
        }
    }
}

/// Render the sidebar for the current filter spec
pub fn render_filter_panel(
    frame: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    filter: &FilterSpec,
    state: &FilterPanelState,
) {
    let border = if state.focused { theme::accent() } else { theme::border() };
    let block = Block::default()
        .title(Span::styled(" Filters ", Style::default().fg(theme::accent()).bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Length(4),
        ])
        .split(inner);

    for (i, column) in CategoryColumn::FILTERABLE.iter().enumerate() {
        render_picker(frame, chunks[i], dataset, filter, *column, state, i);
    }
    render_price(frame, chunks[3], dataset, filter, state);
}

fn render_picker(
    frame: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    filter: &FilterSpec,
    column: CategoryColumn,
    state: &FilterPanelState,
    index: usize,
) {
    let values = dataset.distinct(column);
    let selected = filter.values(column).map_or(0, |set| set.len());
    let active = state.focused && state.section == FilterSection::Column(index);

    let title_style = if active {
        Style::default().fg(theme::accent()).bold()
    } else {
        Style::default().fg(theme::subtle())
    };
    let title = Line::from(vec![
        Span::styled(column.name().to_uppercase(), title_style),
        Span::styled(
            format!(" {}/{}", selected, values.len()),
            Style::default().fg(theme::subtle()),
        ),
    ]);

    let items: Vec<ListItem> = values
        .iter()
        .map(|value| {
            let (mark, color) = if filter.is_selected(column, value) {
                ("[x] ", theme::accent_secondary())
            } else {
                ("[ ] ", theme::subtle())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(color)),
                Span::styled(value.as_str(), Style::default().fg(theme::text())),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::TOP))
        .highlight_style(Style::default().bg(theme::selection_bg()).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if active {
        list_state.select(Some(state.cursors[index].min(values.len().saturating_sub(1))));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_price(
    frame: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    filter: &FilterSpec,
    state: &FilterPanelState,
) {
    let (lo, hi) = dataset.price_range();
    let style_for = |section: FilterSection| {
        if state.focused && state.section == section {
            Style::default().fg(Color::Black).bg(theme::accent()).bold()
        } else {
            Style::default().fg(theme::text())
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("min ", Style::default().fg(theme::subtle())),
            Span::styled(format!("{:.0}", filter.price_min), style_for(FilterSection::PriceMin)),
            Span::styled("  max ", Style::default().fg(theme::subtle())),
            Span::styled(format!("{:.0}", filter.price_max), style_for(FilterSection::PriceMax)),
        ]),
        Line::from(Span::styled(
            format!("range {:.0}-{:.0}", lo, hi),
            Style::default().fg(theme::subtle()),
        )),
    ];

    let title = Span::styled(
        "PRICE",
        if state.focused && matches!(state.section, FilterSection::PriceMin | FilterSection::PriceMax) {
            Style::default().fg(theme::accent()).bold()
        } else {
            Style::default().fg(theme::subtle())
        },
    );

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::TOP)),
        area,
    );
}
