//! Dashboard composition
//!
//! Each interaction builds a fresh [`DashboardRequest`] and passes it to
//! [`render_view`], which recomputes every chart of the requested view from
//! the dataset. Nothing is cached between calls.

mod view;

pub use view::{View, DEFAULT_TOP_N, HOME_SECTIONS};

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::filter::{FilterEngine, FilterSpec};
use crate::listing::Dataset;

/// Immutable input of one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub view: View,
    pub filter: FilterSpec,
    /// Group limit for ranking charts
    pub top_n: usize,
}

impl DashboardRequest {
    /// Request for `view` with every filter at its default
    pub fn new(view: View, dataset: &Dataset) -> Self {
        Self {
            view,
            filter: FilterSpec::all(dataset),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Output of one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedView {
    pub view: View,
    /// Rows kept by the filter spec
    pub matched: usize,
    /// Rows in the dataset
    pub total: usize,
    pub charts: Vec<Chart>,
}

/// Compute every chart of the requested view
pub fn render_view(dataset: &Dataset, request: &DashboardRequest) -> RenderedView {
    let charts: Vec<Chart> = request
        .view
        .charts(request.top_n)
        .iter()
        .map(|spec| spec.build(dataset, &request.filter))
        .collect();

    let matched = if request.view.has_filters() {
        FilterEngine::count(dataset.rows(), &request.filter)
    } else {
        dataset.len()
    };

    tracing::debug!(
        "Rendered {} with {} charts ({} of {} listings matched)",
        request.view,
        charts.len(),
        matched,
        dataset.len()
    );

    RenderedView {
        view: request.view,
        matched,
        total: dataset.len(),
        charts,
    }
}
