//! Filter engine for matching listings against a filter spec

use super::FilterSpec;
use crate::listing::Listing;

/// Engine for filtering listings against a spec
pub struct FilterEngine;

impl FilterEngine {
    /// Check if a listing is kept by the spec
    ///
    /// Every category must be a member of its selected set and the price must
    /// fall inside the inclusive range. An empty set therefore rejects all rows.
    pub fn matches(listing: &Listing, spec: &FilterSpec) -> bool {
        spec.countries.contains(&listing.country)
            && spec.room_types.contains(&listing.room_type)
            && spec.property_types.contains(&listing.property_type)
            && spec.price_min <= listing.price
            && listing.price <= spec.price_max
    }

    /// Build a reusable `keep(row)` predicate bound to `spec`
    pub fn predicate(spec: &FilterSpec) -> impl Fn(&Listing) -> bool + '_ {
        move |listing: &Listing| Self::matches(listing, spec)
    }

    /// Filter listings, returning references to the kept rows in table order
    pub fn filter<'a>(rows: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
        let kept: Vec<&Listing> = rows.iter().filter(|row| Self::matches(row, spec)).collect();
        tracing::debug!("Filter kept {} of {} listings", kept.len(), rows.len());
        kept
    }

    /// Count listings kept by the spec
    pub fn count(rows: &[Listing], spec: &FilterSpec) -> usize {
        rows.iter().filter(|row| Self::matches(row, spec)).count()
    }
}
