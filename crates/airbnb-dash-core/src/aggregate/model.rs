//! Aggregation specs and results

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::listing::{CategoryColumn, NumericField};

/// Aggregate computed per group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateOp {
    /// Number of rows in the group
    Count,
    /// Mean of a numeric field over rows where it is present
    Mean(NumericField),
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateOp::Count => write!(f, "count"),
            AggregateOp::Mean(field) => write!(f, "mean({})", field),
        }
    }
}

/// Ordering of groups when no top-N truncation is requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Group key ascending
    #[default]
    KeyAscending,
    /// Largest value first, ties by key
    ValueDescending,
    /// Smallest value first, ties by key
    ValueAscending,
}

/// What to group by, what to compute and how to order it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSpec {
    pub group_by: Vec<CategoryColumn>,
    pub op: AggregateOp,
    /// Keep only the N largest groups (forces value-descending order)
    pub top_n: Option<usize>,
    pub order: SortOrder,
    /// Drop the fractional part of finite values
    #[serde(default)]
    pub truncate: bool,
}

impl AggregationSpec {
    /// Count rows per value of `column`
    pub fn count(column: CategoryColumn) -> Self {
        Self {
            group_by: vec![column],
            op: AggregateOp::Count,
            top_n: None,
            order: SortOrder::default(),
            truncate: false,
        }
    }

    /// Average `field` per value of `column`
    pub fn mean(column: CategoryColumn, field: NumericField) -> Self {
        Self {
            op: AggregateOp::Mean(field),
            ..Self::count(column)
        }
    }

    /// Add another group-by column
    pub fn by(mut self, column: CategoryColumn) -> Self {
        self.group_by.push(column);
        self
    }

    /// Keep only the top `n` groups by value
    pub fn top(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Truncate finite values to integers
    pub fn truncated(mut self) -> Self {
        self.truncate = true;
        self
    }
}

/// One group of an aggregation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Values of the group-by columns, in `group_by` order
    pub key: Vec<String>,
    /// Aggregate value; NaN when a mean had no eligible rows
    pub value: f64,
}

impl AggregateRow {
    /// Key formatted for labels
    pub fn label(&self) -> String {
        self.key.join(" / ")
    }
}

/// Ordered `(group key, value)` pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub group_by: Vec<CategoryColumn>,
    pub op: AggregateOp,
    pub rows: Vec<AggregateRow>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Look up the value for a single-column key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.key.len() == 1 && row.key[0] == key)
            .map(|row| row.value)
    }

    /// Largest finite value, used to scale bars
    pub fn max_value(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(|row| row.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    /// Sum of finite values
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.value)
            .filter(|v| v.is_finite())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(values: &[(&str, f64)]) -> AggregationResult {
        AggregationResult {
            group_by: vec![CategoryColumn::RoomType],
            op: AggregateOp::Count,
            rows: values
                .iter()
                .map(|(k, v)| AggregateRow {
                    key: vec![k.to_string()],
                    value: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_spec_builders() {
        let spec = AggregationSpec::mean(CategoryColumn::Country, NumericField::Price)
            .by(CategoryColumn::RoomType)
            .top(5)
            .truncated();
        assert_eq!(spec.group_by, vec![CategoryColumn::Country, CategoryColumn::RoomType]);
        assert_eq!(spec.op, AggregateOp::Mean(NumericField::Price));
        assert_eq!(spec.top_n, Some(5));
        assert!(spec.truncate);
    }

    #[test]
    fn test_max_and_total_skip_nan() {
        let r = result(&[("a", 2.0), ("b", f64::NAN), ("c", 5.0)]);
        assert_eq!(r.max_value(), Some(5.0));
        assert_eq!(r.total(), 7.0);
        assert_eq!(r.get("c"), Some(5.0));
        assert!(r.get("b").unwrap().is_nan());
        assert_eq!(r.get("z"), None);
    }

    #[test]
    fn test_max_of_empty() {
        assert_eq!(result(&[]).max_value(), None);
    }

    #[test]
    fn test_op_display() {
        assert_eq!(AggregateOp::Count.to_string(), "count");
        assert_eq!(
            AggregateOp::Mean(NumericField::ReviewScores).to_string(),
            "mean(review_scores)"
        );
    }

    #[test]
    fn test_row_label() {
        let row = AggregateRow {
            key: vec!["Spain".into(), "Loft".into()],
            value: 1.0,
        };
        assert_eq!(row.label(), "Spain / Loft");
    }
}
