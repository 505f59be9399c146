//! Chart specifications handed to renderers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateOp, AggregationResult, AggregationSpec, Aggregator};
use crate::filter::FilterSpec;
use crate::listing::Dataset;

/// Visual form of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    BarHorizontal,
    BarVertical,
    Pie,
    Choropleth,
    ScatterGeo,
}

impl ChartKind {
    /// Tag used in exports and text output
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::BarHorizontal => "bar-horizontal",
            ChartKind::BarVertical => "bar-vertical",
            ChartKind::Pie => "pie",
            ChartKind::Choropleth => "choropleth",
            ChartKind::ScatterGeo => "scatter-geo",
        }
    }

    /// Whether the group keys are country names placed on a map
    pub fn is_geo(&self) -> bool {
        matches!(self, ChartKind::Choropleth | ChartKind::ScatterGeo)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Color scale for value-colored charts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    #[default]
    Agsunset,
    Plasma,
    Viridis,
    Rainbow,
    Set1,
}

impl ColorScale {
    /// RGB stops from low to high
    pub fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorScale::Agsunset => &[(75, 41, 145), (192, 54, 157), (234, 79, 136), (250, 120, 118), (246, 169, 122), (237, 217, 163)],
            ColorScale::Plasma => &[(13, 8, 135), (126, 3, 168), (204, 71, 120), (248, 149, 64), (240, 249, 33)],
            ColorScale::Viridis => &[(68, 1, 84), (59, 82, 139), (33, 145, 140), (94, 201, 98), (253, 231, 37)],
            ColorScale::Rainbow => &[(150, 0, 90), (0, 0, 200), (0, 25, 255), (0, 152, 255), (44, 255, 150), (151, 255, 0), (255, 234, 0), (255, 111, 0), (255, 0, 0)],
            ColorScale::Set1 => &[(228, 26, 28), (55, 126, 184), (77, 175, 74), (152, 78, 163), (255, 127, 0), (255, 255, 51), (166, 86, 40), (247, 129, 191), (153, 153, 153)],
        }
    }

    /// Nearest stop for `t` in `[0, 1]`; out-of-range and NaN clamp to the ends
    pub fn sample(&self, t: f64) -> (u8, u8, u8) {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = (t * (stops.len() - 1) as f64).round() as usize;
        stops[idx.min(stops.len() - 1)]
    }

    /// Stop for the `i`-th category, cycling
    pub fn categorical(&self, i: usize) -> (u8, u8, u8) {
        let stops = self.stops();
        stops[i % stops.len()]
    }
}

/// Which table a chart aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSource {
    /// Rows kept by the current filter spec
    #[default]
    Filtered,
    /// Every row, ignoring the filter spec
    Full,
}

/// Everything needed to compute and draw one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub aggregation: AggregationSpec,
    pub source: TableSource,
    /// Axis label for group keys
    pub key_label: String,
    /// Axis label for values
    pub value_label: String,
    pub color_scale: ColorScale,
    pub show_legend: bool,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind, aggregation: AggregationSpec) -> Self {
        let key_label = aggregation
            .group_by
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(" / ");
        let value_label = match aggregation.op {
            AggregateOp::Count => "Listings".to_string(),
            AggregateOp::Mean(field) => field.name().to_string(),
        };
        Self {
            title: title.into(),
            kind,
            aggregation,
            source: TableSource::Filtered,
            key_label,
            value_label,
            color_scale: ColorScale::default(),
            show_legend: true,
        }
    }

    pub fn source(mut self, source: TableSource) -> Self {
        self.source = source;
        self
    }

    pub fn labels(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_label = key.into();
        self.value_label = value.into();
        self
    }

    pub fn color_scale(mut self, scale: ColorScale) -> Self {
        self.color_scale = scale;
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    /// Run the aggregation against the table this chart reads
    pub fn build(&self, dataset: &Dataset, filter: &FilterSpec) -> Chart {
        let data = match self.source {
            TableSource::Filtered => Aggregator::filtered(dataset.rows(), filter, &self.aggregation),
            TableSource::Full => Aggregator::aggregate(dataset.rows(), &self.aggregation),
        };
        Chart {
            spec: self.clone(),
            data,
        }
    }
}

/// A chart spec together with its computed series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub spec: ChartSpec,
    pub data: AggregationResult,
}

impl Chart {
    /// Format a value for display: counts as integers, means with two decimals
    pub fn format_value(&self, value: f64) -> String {
        format_value(self.data.op, value)
    }
}

/// Format an aggregate value; NaN renders as `n/a`
pub fn format_value(op: AggregateOp, value: f64) -> String {
    if value.is_nan() {
        return "n/a".to_string();
    }
    match op {
        AggregateOp::Count => format!("{:.0}", value),
        AggregateOp::Mean(_) if value.fract() == 0.0 => format!("{:.0}", value),
        AggregateOp::Mean(_) => format!("{:.2}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{CategoryColumn, Listing, NumericField};

    fn dataset() -> Dataset {
        let row = |country: &str, price: f64| Listing {
            country: country.to_string(),
            property_type: "Apartment".to_string(),
            room_type: "Entire home".to_string(),
            price,
            ..Default::default()
        };
        Dataset::from_listings(vec![row("US", 100.0), row("FR", 200.0), row("FR", 300.0)])
    }

    #[test]
    fn test_default_labels() {
        let spec = ChartSpec::new(
            "t",
            ChartKind::Pie,
            AggregationSpec::mean(CategoryColumn::RoomType, NumericField::Availability365),
        );
        assert_eq!(spec.key_label, "room_type");
        assert_eq!(spec.value_label, "availability_365");
        assert_eq!(spec.source, TableSource::Filtered);
    }

    #[test]
    fn test_build_respects_source() {
        let data = dataset();
        let filter = FilterSpec::all(&data).with_values(CategoryColumn::Country, ["US"]);
        let spec = ChartSpec::new(
            "Listings per country",
            ChartKind::Choropleth,
            AggregationSpec::count(CategoryColumn::Country),
        );

        let filtered = spec.build(&data, &filter);
        assert_eq!(filtered.data.len(), 1);
        assert_eq!(filtered.data.get("US"), Some(1.0));

        let full = spec.clone().source(TableSource::Full).build(&data, &filter);
        assert_eq!(full.data.len(), 2);
        assert_eq!(full.data.get("FR"), Some(2.0));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(AggregateOp::Count, 12.0), "12");
        assert_eq!(format_value(AggregateOp::Mean(NumericField::Price), 12.345), "12.35");
        assert_eq!(format_value(AggregateOp::Mean(NumericField::Price), 200.0), "200");
        assert_eq!(format_value(AggregateOp::Mean(NumericField::Price), f64::NAN), "n/a");
    }

    #[test]
    fn test_color_scale_sample() {
        let scale = ColorScale::Viridis;
        assert_eq!(scale.sample(0.0), scale.stops()[0]);
        assert_eq!(scale.sample(1.0), *scale.stops().last().unwrap());
        assert_eq!(scale.sample(f64::NAN), scale.stops()[0]);
        assert_eq!(scale.sample(7.0), *scale.stops().last().unwrap());
        assert_eq!(ColorScale::Set1.categorical(9), ColorScale::Set1.stops()[0]);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ChartKind::ScatterGeo.to_string(), "scatter-geo");
        assert!(ChartKind::Choropleth.is_geo());
        assert!(!ChartKind::Pie.is_geo());
    }
}
