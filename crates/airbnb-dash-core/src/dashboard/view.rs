//! Dashboard views and the charts each one shows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregationSpec, SortOrder};
use crate::chart::{ChartKind, ChartSpec, ColorScale, TableSource};
use crate::error::Error;
use crate::listing::{CategoryColumn, NumericField};

/// Default number of groups kept by the ranking charts
pub const DEFAULT_TOP_N: usize = 10;

/// The three dashboard views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Home,
    Statistics,
    Analysis,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Statistics, View::Analysis];

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "HOME",
            View::Statistics => "STATISTICS",
            View::Analysis => "ANALYSIS",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            View::Home => 0,
            View::Statistics => 1,
            View::Analysis => 2,
        }
    }

    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }

    /// Whether the view has a filter sidebar
    pub fn has_filters(&self) -> bool {
        !matches!(self, View::Home)
    }

    /// Chart definitions for this view, in display order
    pub fn charts(&self, top_n: usize) -> Vec<ChartSpec> {
        match self {
            View::Home => Vec::new(),
            View::Statistics => statistics_charts(top_n),
            View::Analysis => analysis_charts(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "statistics" | "stats" => Ok(View::Statistics),
            "analysis" => Ok(View::Analysis),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

/// Informational text shown on the HOME view
pub const HOME_SECTIONS: [(&str, &str); 3] = [
    (
        "INTRODUCTION",
        "Airbnb is an online marketplace that connects people looking for lodging, \
         usually for short stays, with people who want to rent out their property. \
         It gives hosts a simple way to earn money from their home, and guests often \
         find Airbnb apartments cozier and cheaper than hotels.",
    ),
    (
        "PROBLEM STATEMENT",
        "Analyze Airbnb listings to gain insight into pricing variations, availability \
         patterns and location-based trends, using interactive filters and dynamic charts.",
    ),
    (
        "OBJECTIVE",
        "Provide an interactive application for exploring listings, with dynamic \
         visualizations of pricing and availability and location-based insights.",
    ),
];

fn statistics_charts(top_n: usize) -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            format!("Top {} Property Types", top_n),
            ChartKind::BarHorizontal,
            AggregationSpec::count(CategoryColumn::PropertyType).top(top_n),
        ),
        ChartSpec::new(
            format!("Top {} Hosts with Highest number of Listings", top_n),
            ChartKind::BarHorizontal,
            AggregationSpec::count(CategoryColumn::HostName).top(top_n),
        )
        .hide_legend(),
        ChartSpec::new(
            "Total Listings in each room_types",
            ChartKind::Pie,
            AggregationSpec::count(CategoryColumn::RoomType),
        )
        .color_scale(ColorScale::Rainbow),
        ChartSpec::new(
            "Total Listings in each country",
            ChartKind::Choropleth,
            AggregationSpec::count(CategoryColumn::Country),
        )
        .labels("country", "Total_Listings")
        .color_scale(ColorScale::Plasma),
        // These two read the whole table, not the filtered one
        ChartSpec::new(
            "Average Review Scores by Room Type",
            ChartKind::BarVertical,
            AggregationSpec::mean(CategoryColumn::RoomType, NumericField::ReviewScores)
                .order(SortOrder::ValueAscending),
        )
        .source(TableSource::Full)
        .labels("Room Type", "Average Review Scores")
        .color_scale(ColorScale::Viridis),
        ChartSpec::new(
            "Average Price by Room Type",
            ChartKind::BarVertical,
            AggregationSpec::mean(CategoryColumn::RoomType, NumericField::Price)
                .order(SortOrder::ValueAscending),
        )
        .source(TableSource::Full)
        .labels("Room Type", "Average Price"),
    ]
}

fn analysis_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            "Avg price in each Room type",
            ChartKind::BarVertical,
            AggregationSpec::mean(CategoryColumn::RoomType, NumericField::Price)
                .order(SortOrder::ValueAscending),
        ),
        ChartSpec::new(
            "Avg price in each country",
            ChartKind::ScatterGeo,
            AggregationSpec::mean(CategoryColumn::Country, NumericField::Price),
        ),
        ChartSpec::new(
            "Avg Availability in each country",
            ChartKind::ScatterGeo,
            AggregationSpec::mean(CategoryColumn::Country, NumericField::Availability365)
                .truncated(),
        ),
        ChartSpec::new(
            "Average Availability by Room Type",
            ChartKind::Pie,
            AggregationSpec::mean(CategoryColumn::RoomType, NumericField::Availability365),
        )
        .labels("Room Type", "Average Availability (in days)")
        .color_scale(ColorScale::Set1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_navigation_wraps() {
        assert_eq!(View::Home.next(), View::Statistics);
        assert_eq!(View::Analysis.next(), View::Home);
        assert_eq!(View::Home.prev(), View::Analysis);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("STATISTICS".parse::<View>().unwrap(), View::Statistics);
        assert_eq!("analysis".parse::<View>().unwrap(), View::Analysis);
        assert!(matches!("charts".parse::<View>(), Err(Error::UnknownView(_))));
    }

    #[test]
    fn test_home_has_no_charts() {
        assert!(View::Home.charts(DEFAULT_TOP_N).is_empty());
        assert!(!View::Home.has_filters());
    }

    #[test]
    fn test_statistics_charts() {
        let charts = View::Statistics.charts(5);
        assert_eq!(charts.len(), 6);
        assert_eq!(charts[0].title, "Top 5 Property Types");
        assert_eq!(charts[0].aggregation.top_n, Some(5));
        assert_eq!(charts[4].source, TableSource::Full);
        assert_eq!(charts[5].source, TableSource::Full);
        assert!(charts[..4].iter().all(|c| c.source == TableSource::Filtered));
    }

    #[test]
    fn test_analysis_charts_read_filtered_table() {
        let charts = View::Analysis.charts(DEFAULT_TOP_N);
        assert_eq!(charts.len(), 4);
        assert!(charts.iter().all(|c| c.source == TableSource::Filtered));
        assert!(charts[2].aggregation.truncate);
    }
}
