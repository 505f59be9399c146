//! Aggregation module
//!
//! Groups listings by one or more categorical columns and reduces each group
//! to a single value (row count or mean of a numeric field).

mod aggregator;
mod model;

pub use aggregator::Aggregator;
pub use model::*;
