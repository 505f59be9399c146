//! Listing row and column descriptors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// A single row of the listings table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing display name
    pub name: String,
    pub host_name: String,
    pub country: String,
    pub property_type: String,
    pub room_type: String,
    /// Nightly price, NaN when the cell is empty
    #[serde(deserialize_with = "empty_as_nan")]
    pub price: f64,
    /// Days available in the next year (0-365), NaN when the cell is empty
    #[serde(deserialize_with = "empty_as_nan")]
    pub availability_365: f64,
    /// Overall review score, absent when the listing has no reviews
    #[serde(default)]
    pub review_scores: Option<f64>,
}

/// Reads an empty numeric cell as NaN instead of rejecting the row
fn empty_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Categorical columns that rows can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryColumn {
    Country,
    PropertyType,
    RoomType,
    HostName,
}

impl CategoryColumn {
    /// Columns that have a picker in the filter sidebar
    pub const FILTERABLE: [CategoryColumn; 3] = [
        CategoryColumn::Country,
        CategoryColumn::PropertyType,
        CategoryColumn::RoomType,
    ];

    /// Column name as it appears in the dataset header
    pub fn name(&self) -> &'static str {
        match self {
            CategoryColumn::Country => "country",
            CategoryColumn::PropertyType => "property_type",
            CategoryColumn::RoomType => "room_type",
            CategoryColumn::HostName => "host_name",
        }
    }

    /// Read this column from a listing
    pub fn value<'a>(&self, listing: &'a Listing) -> &'a str {
        match self {
            CategoryColumn::Country => &listing.country,
            CategoryColumn::PropertyType => &listing.property_type,
            CategoryColumn::RoomType => &listing.room_type,
            CategoryColumn::HostName => &listing.host_name,
        }
    }
}

impl fmt::Display for CategoryColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "country" => Ok(CategoryColumn::Country),
            "property_type" | "property" => Ok(CategoryColumn::PropertyType),
            "room_type" | "room" => Ok(CategoryColumn::RoomType),
            "host_name" | "host" => Ok(CategoryColumn::HostName),
            _ => Err(Error::UnknownColumn(s.to_string())),
        }
    }
}

/// Numeric columns that can be averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Price,
    Availability365,
    ReviewScores,
}

impl NumericField {
    /// Column name as it appears in the dataset header
    pub fn name(&self) -> &'static str {
        match self {
            NumericField::Price => "price",
            NumericField::Availability365 => "availability_365",
            NumericField::ReviewScores => "review_scores",
        }
    }

    /// Read this field from a listing; `None` when the value is missing
    pub fn value(&self, listing: &Listing) -> Option<f64> {
        let v = match self {
            NumericField::Price => listing.price,
            NumericField::Availability365 => listing.availability_365,
            NumericField::ReviewScores => listing.review_scores?,
        };
        // NaN cells are treated the same as empty ones
        (!v.is_nan()).then_some(v)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
