//! Filter spec definitions

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::listing::{CategoryColumn, Dataset};

/// User selections applied before aggregation
///
/// An empty category set selects nothing. Values that do not occur in the
/// dataset are allowed and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Countries to include
    pub countries: BTreeSet<String>,
    /// Property types to include
    pub property_types: BTreeSet<String>,
    /// Room types to include
    pub room_types: BTreeSet<String>,
    /// Minimum price (inclusive)
    pub price_min: f64,
    /// Maximum price (inclusive)
    pub price_max: f64,
}

impl FilterSpec {
    /// Spec that keeps every row of `dataset`: all distinct values, full price range
    pub fn all(dataset: &Dataset) -> Self {
        let (price_min, price_max) = dataset.price_range();
        Self {
            countries: dataset.distinct(CategoryColumn::Country).into_iter().collect(),
            property_types: dataset
                .distinct(CategoryColumn::PropertyType)
                .into_iter()
                .collect(),
            room_types: dataset.distinct(CategoryColumn::RoomType).into_iter().collect(),
            price_min,
            price_max,
        }
    }

    /// Allowed values for a filterable column, `None` for columns without a picker
    pub fn values(&self, column: CategoryColumn) -> Option<&BTreeSet<String>> {
        match column {
            CategoryColumn::Country => Some(&self.countries),
            CategoryColumn::PropertyType => Some(&self.property_types),
            CategoryColumn::RoomType => Some(&self.room_types),
            CategoryColumn::HostName => None,
        }
    }

    fn values_mut(&mut self, column: CategoryColumn) -> Option<&mut BTreeSet<String>> {
        match column {
            CategoryColumn::Country => Some(&mut self.countries),
            CategoryColumn::PropertyType => Some(&mut self.property_types),
            CategoryColumn::RoomType => Some(&mut self.room_types),
            CategoryColumn::HostName => None,
        }
    }

    /// Replace the selection for a column
    pub fn with_values<I, S>(mut self, column: CategoryColumn, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(set) = self.values_mut(column) {
            *set = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Set the inclusive price range
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Check if a value is selected for a column
    pub fn is_selected(&self, column: CategoryColumn, value: &str) -> bool {
        self.values(column).map_or(false, |set| set.contains(value))
    }

    /// Toggle a single value on or off
    pub fn toggle(&mut self, column: CategoryColumn, value: &str) {
        if let Some(set) = self.values_mut(column) {
            if !set.remove(value) {
                set.insert(value.to_string());
            }
        }
    }

    /// Select every distinct value the dataset has for a column
    pub fn select_all(&mut self, column: CategoryColumn, dataset: &Dataset) {
        if let Some(set) = self.values_mut(column) {
            *set = dataset.distinct(column).into_iter().collect();
        }
    }

    /// Deselect every value of a column
    pub fn clear(&mut self, column: CategoryColumn) {
        if let Some(set) = self.values_mut(column) {
            set.clear();
        }
    }

    /// Move the price range, keeping it inside `bounds` and `min <= max`
    pub fn set_price_range(&mut self, min: f64, max: f64, bounds: (f64, f64)) {
        let (lo, hi) = bounds;
        let min = min.clamp(lo, hi);
        let max = max.clamp(lo, hi);
        self.price_min = min.min(max);
        self.price_max = max.max(min);
    }

    /// Get a human-readable summary of the filters relative to `dataset`
    pub fn summary(&self, dataset: &Dataset) -> String {
        let mut parts = Vec::new();

        for column in CategoryColumn::FILTERABLE {
            let Some(selected) = self.values(column) else {
                continue;
            };
            let total = dataset.distinct(column).len();
            if selected.is_empty() {
                parts.push(format!("{}: none", column));
            } else if selected.len() < total {
                parts.push(format!("{}: {}/{}", column, selected.len(), total));
            }
        }

        let (lo, hi) = dataset.price_range();
        if self.price_min > lo || self.price_max < hi {
            parts.push(format!("price {:.0}-{:.0}", self.price_min, self.price_max));
        }

        if parts.is_empty() {
            "No filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;

    fn listing(country: &str, property_type: &str, room_type: &str, price: f64) -> Listing {
        Listing {
            country: country.to_string(),
            property_type: property_type.to_string(),
            room_type: room_type.to_string(),
            price,
            ..Default::default()
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_listings(vec![
            listing("US", "House", "Entire home", 100.0),
            listing("US", "Apartment", "Private room", 50.0),
            listing("FR", "Apartment", "Entire home", 200.0),
        ])
    }

    #[test]
    fn test_all_selects_everything() {
        let spec = FilterSpec::all(&dataset());
        assert_eq!(spec.countries.len(), 2);
        assert_eq!(spec.property_types.len(), 2);
        assert_eq!(spec.room_types.len(), 2);
        assert_eq!((spec.price_min, spec.price_max), (50.0, 200.0));
    }

    #[test]
    fn test_toggle() {
        let mut spec = FilterSpec::all(&dataset());
        spec.toggle(CategoryColumn::Country, "US");
        assert!(!spec.is_selected(CategoryColumn::Country, "US"));
        assert!(spec.is_selected(CategoryColumn::Country, "FR"));

        spec.toggle(CategoryColumn::Country, "US");
        assert!(spec.is_selected(CategoryColumn::Country, "US"));
    }

    #[test]
    fn test_host_name_has_no_picker() {
        let mut spec = FilterSpec::all(&dataset());
        spec.toggle(CategoryColumn::HostName, "anyone");
        assert!(spec.values(CategoryColumn::HostName).is_none());
        assert!(!spec.is_selected(CategoryColumn::HostName, "anyone"));
    }

    #[test]
    fn test_clear_and_select_all() {
        let data = dataset();
        let mut spec = FilterSpec::all(&data);
        spec.clear(CategoryColumn::RoomType);
        assert!(spec.room_types.is_empty());

        spec.select_all(CategoryColumn::RoomType, &data);
        assert_eq!(spec.room_types.len(), 2);
    }

    #[test]
    fn test_set_price_range_clamps() {
        let mut spec = FilterSpec::default();
        spec.set_price_range(-10.0, 500.0, (50.0, 200.0));
        assert_eq!((spec.price_min, spec.price_max), (50.0, 200.0));

        spec.set_price_range(150.0, 100.0, (50.0, 200.0));
        assert_eq!((spec.price_min, spec.price_max), (100.0, 150.0));
    }

    #[test]
    fn test_with_values() {
        let spec = FilterSpec::all(&dataset()).with_values(CategoryColumn::Country, ["FR"]);
        assert_eq!(spec.countries.len(), 1);
        assert!(spec.is_selected(CategoryColumn::Country, "FR"));
    }

    #[test]
    fn test_summary() {
        let data = dataset();
        assert_eq!(FilterSpec::all(&data).summary(&data), "No filters");

        let spec = FilterSpec::all(&data)
            .with_values(CategoryColumn::Country, ["FR"])
            .with_values(CategoryColumn::RoomType, Vec::<String>::new())
            .with_price_range(60.0, 200.0);
        let summary = spec.summary(&data);
        assert!(summary.contains("country: 1/2"));
        assert!(summary.contains("room_type: none"));
        assert!(summary.contains("price 60-200"));
    }
}
