//! Listing filtering module
//!
//! Turns the sidebar selections (category sets and a price range) into a
//! predicate over the listings table.

mod criteria;
mod engine;

pub use criteria::FilterSpec;
pub use engine::FilterEngine;
