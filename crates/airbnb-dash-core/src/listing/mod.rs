//! Listings dataset: row model and the in-memory table
//!
//! The table is loaded once from CSV and only read afterwards.

mod dataset;
mod model;

pub use dataset::Dataset;
pub use model::{CategoryColumn, Listing, NumericField};
