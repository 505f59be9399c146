//! # airbnb-dash-core
//!
//! Core library for the Airbnb listings dashboard.
//!
//! This crate provides the foundational functionality for:
//! - Loading the listings table from CSV
//! - Turning sidebar selections into a row predicate
//! - Grouping and aggregating the filtered rows into chart series
//! - Composing the charts of each dashboard view
//! - Exporting rendered views to JSON and CSV
//!
//! ## Modules
//!
//! - [`listing`] - Listing rows and the in-memory dataset
//! - [`filter`] - Filter spec and predicate engine
//! - [`aggregate`] - Group-by aggregation with ranking
//! - [`chart`] - Chart specs and rendering sinks
//! - [`dashboard`] - Views, requests and the render function
//! - [`config`] - Persistent user configuration
//! - [`export`] - JSON/CSV export
//! - [`error`] - Error types and Result alias
//!
//! ## Example
//!
//! ```no_run
//! use airbnb_dash_core::{render_view, DashboardRequest, Dataset, View};
//!
//! let dataset = Dataset::load("airbnb_data.csv").expect("Failed to load");
//! let request = DashboardRequest::new(View::Statistics, &dataset);
//! let rendered = render_view(&dataset, &request);
//! for chart in &rendered.charts {
//!     println!("{}: {} groups", chart.spec.title, chart.data.len());
//! }
//! ```

// Module declarations
pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod listing;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Dataset
pub use listing::{CategoryColumn, Dataset, Listing, NumericField};

// Filtering
pub use filter::{FilterEngine, FilterSpec};

// Aggregation
pub use aggregate::{
    AggregateOp, AggregateRow, AggregationResult, AggregationSpec, Aggregator, SortOrder,
};

// Charts
pub use chart::{Chart, ChartKind, ChartRenderer, ChartSpec, ColorScale, TableSource, TextRenderer};

// Dashboard
pub use dashboard::{render_view, DashboardRequest, RenderedView, View, DEFAULT_TOP_N};

// Configuration
pub use config::{Config, ThemeName};

// Export
pub use export::{export_csv, export_json, ExportFormat};
