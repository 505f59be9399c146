//! Group-by aggregation over listings

use std::cmp::Ordering;
use std::collections::HashMap;

use super::model::{AggregateOp, AggregateRow, AggregationResult, AggregationSpec, SortOrder};
use crate::filter::{FilterEngine, FilterSpec};
use crate::listing::Listing;

/// Running totals for one group
#[derive(Debug, Default)]
struct Accumulator {
    rows: usize,
    sum: f64,
    present: usize,
}

impl Accumulator {
    fn value(&self, op: AggregateOp) -> f64 {
        match op {
            AggregateOp::Count => self.rows as f64,
            AggregateOp::Mean(_) if self.present == 0 => f64::NAN,
            AggregateOp::Mean(_) => self.sum / self.present as f64,
        }
    }
}

/// Reduces listings to the series a chart needs
pub struct Aggregator;

impl Aggregator {
    /// Filter `rows` with `filter`, then aggregate what is left
    pub fn filtered(rows: &[Listing], filter: &FilterSpec, spec: &AggregationSpec) -> AggregationResult {
        Self::aggregate(FilterEngine::filter(rows, filter), spec)
    }

    /// Aggregate already-selected rows
    pub fn aggregate<'a, I>(rows: I, spec: &AggregationSpec) -> AggregationResult
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut groups: HashMap<Vec<&'a str>, Accumulator> = HashMap::new();

        for row in rows {
            let key: Vec<&str> = spec.group_by.iter().map(|c| c.value(row)).collect();
            let acc = groups.entry(key).or_default();
            acc.rows += 1;

            if let AggregateOp::Mean(field) = spec.op {
                if let Some(v) = field.value(row) {
                    acc.sum += v;
                    acc.present += 1;
                }
            }
        }

        let mut out: Vec<AggregateRow> = groups
            .into_iter()
            .map(|(key, acc)| {
                let mut value = acc.value(spec.op);
                if spec.truncate && value.is_finite() {
                    value = value.trunc();
                }
                AggregateRow {
                    key: key.into_iter().map(str::to_string).collect(),
                    value,
                }
            })
            .collect();

        match spec.top_n {
            Some(n) => {
                out.sort_by(by_value_desc);
                out.truncate(n);
            }
            None => match spec.order {
                SortOrder::KeyAscending => out.sort_by(|a, b| a.key.cmp(&b.key)),
                SortOrder::ValueDescending => out.sort_by(by_value_desc),
                SortOrder::ValueAscending => out.sort_by(by_value_asc),
            },
        }

        tracing::debug!("Aggregated {} by {:?} into {} groups", spec.op, spec.group_by, out.len());

        AggregationResult {
            group_by: spec.group_by.clone(),
            op: spec.op,
            rows: out,
        }
    }
}

/// NaN sorts after every number regardless of direction
fn nan_last(a: f64, b: f64) -> Option<Ordering> {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        (false, false) => None,
    }
}

fn by_value_desc(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    nan_last(a.value, b.value)
        .unwrap_or_else(|| b.value.total_cmp(&a.value))
        .then_with(|| a.key.cmp(&b.key))
}

fn by_value_asc(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    nan_last(a.value, b.value)
        .unwrap_or_else(|| a.value.total_cmp(&b.value))
        .then_with(|| a.key.cmp(&b.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{CategoryColumn, NumericField};

    fn listing(host: &str, room_type: &str, price: f64, review: Option<f64>) -> Listing {
        Listing {
            host_name: host.to_string(),
            country: "US".to_string(),
            property_type: "Apartment".to_string(),
            room_type: room_type.to_string(),
            price,
            review_scores: review,
            ..Default::default()
        }
    }

    fn rows() -> Vec<Listing> {
        vec![
            listing("ana", "Entire home", 100.0, Some(90.0)),
            listing("ana", "Entire home", 300.0, None),
            listing("ben", "Private room", 50.0, None),
            listing("cy", "Shared room", 20.0, Some(70.0)),
            listing("cy", "Shared room", 30.0, Some(80.0)),
            listing("dee", "Hotel room", 150.0, Some(99.0)),
        ]
    }

    #[test]
    fn test_count_by_key() {
        let rows = rows();
        let result = Aggregator::aggregate(&rows, &AggregationSpec::count(CategoryColumn::RoomType));
        let keys: Vec<String> = result.rows.iter().map(|r| r.label()).collect();
        assert_eq!(keys, vec!["Entire home", "Hotel room", "Private room", "Shared room"]);
        assert_eq!(result.get("Entire home"), Some(2.0));
        assert_eq!(result.get("Hotel room"), Some(1.0));
    }

    #[test]
    fn test_mean_excludes_missing() {
        let rows = rows();
        let spec = AggregationSpec::mean(CategoryColumn::RoomType, NumericField::ReviewScores);
        let result = Aggregator::aggregate(&rows, &spec);
        // one of the two entire homes has no score
        assert_eq!(result.get("Entire home"), Some(90.0));
        assert_eq!(result.get("Shared room"), Some(75.0));
    }

    #[test]
    fn test_mean_with_no_values_is_nan() {
        let rows = rows();
        let spec = AggregationSpec::mean(CategoryColumn::RoomType, NumericField::ReviewScores);
        let result = Aggregator::aggregate(&rows, &spec);
        let value = result.get("Private room").unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_top_n_desc_with_ties_by_key() {
        let rows = rows();
        let spec = AggregationSpec::count(CategoryColumn::HostName).top(3);
        let result = Aggregator::aggregate(&rows, &spec);
        let keys: Vec<String> = result.rows.iter().map(|r| r.label()).collect();
        // ana=2, cy=2, then ben/dee=1 tie broken by key
        assert_eq!(keys, vec!["ana", "cy", "ben"]);
    }

    #[test]
    fn test_top_n_larger_than_groups() {
        let rows = rows();
        let spec = AggregationSpec::count(CategoryColumn::HostName).top(100);
        assert_eq!(Aggregator::aggregate(&rows, &spec).len(), 4);
    }

    #[test]
    fn test_value_ascending_puts_nan_last() {
        let rows = rows();
        let spec = AggregationSpec::mean(CategoryColumn::RoomType, NumericField::ReviewScores)
            .order(SortOrder::ValueAscending);
        let result = Aggregator::aggregate(&rows, &spec);
        let keys: Vec<String> = result.rows.iter().map(|r| r.label()).collect();
        assert_eq!(keys, vec!["Shared room", "Entire home", "Hotel room", "Private room"]);
    }

    #[test]
    fn test_value_descending() {
        let rows = rows();
        let spec = AggregationSpec::mean(CategoryColumn::RoomType, NumericField::Price)
            .order(SortOrder::ValueDescending);
        let result = Aggregator::aggregate(&rows, &spec);
        assert_eq!(result.rows[0].label(), "Entire home");
        assert_eq!(result.rows[0].value, 200.0);
        assert_eq!(result.rows.last().unwrap().label(), "Shared room");
    }

    #[test]
    fn test_truncated_values() {
        let rows = rows();
        let spec = AggregationSpec::mean(CategoryColumn::RoomType, NumericField::ReviewScores)
            .truncated();
        let result = Aggregator::aggregate(&rows, &spec);
        assert_eq!(result.get("Shared room"), Some(75.0));

        let spec = AggregationSpec::mean(CategoryColumn::HostName, NumericField::Price).truncated();
        let more = vec![listing("eve", "Loft", 10.0, None), listing("eve", "Loft", 11.0, None)];
        assert_eq!(Aggregator::aggregate(&more, &spec).get("eve"), Some(10.0));
    }

    #[test]
    fn test_multi_column_key() {
        let rows = rows();
        let spec = AggregationSpec::count(CategoryColumn::Country).by(CategoryColumn::RoomType);
        let result = Aggregator::aggregate(&rows, &spec);
        assert_eq!(result.rows[0].key, vec!["US".to_string(), "Entire home".to_string()]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Listing> = Vec::new();
        let spec = AggregationSpec::mean(CategoryColumn::Country, NumericField::Price).top(10);
        let result = Aggregator::aggregate(&rows, &spec);
        assert!(result.is_empty());
    }
}
