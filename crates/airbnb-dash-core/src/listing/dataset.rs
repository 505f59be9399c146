//! In-memory listings table

use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::model::{CategoryColumn, Listing};
use crate::error::{Error, Result};

/// Immutable listings table, cheap to clone and share across renders
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Arc<Vec<Listing>>,
}

impl Dataset {
    /// Load listings from a CSV file with a header row
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dataset = Self::read_csv(reader, path)?;
        tracing::info!("Loaded {} listings from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Load listings from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_csv(csv::Reader::from_reader(reader), Path::new("<reader>"))
    }

    fn read_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self> {
        let rows = reader
            .deserialize::<Listing>()
            .map(|row| row.map_err(|e| row_error(path, e)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_listings(rows))
    }

    /// Build a dataset from rows already in memory
    pub fn from_listings(rows: Vec<Listing>) -> Self {
        Self { rows: Arc::new(rows) }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct values of a categorical column, sorted for display
    pub fn distinct(&self, column: CategoryColumn) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| column.value(row))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Observed `(min, max)` price, or `(0.0, 0.0)` for an empty table
    pub fn price_range(&self) -> (f64, f64) {
        let mut prices = self.rows.iter().map(|r| r.price).filter(|p| !p.is_nan());
        let Some(first) = prices.next() else {
            return (0.0, 0.0);
        };
        prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }
}

fn row_error(path: &Path, err: csv::Error) -> Error {
    if let csv::ErrorKind::Deserialize { pos: Some(pos), err: de } = err.kind() {
        return Error::InvalidRow {
            line: pos.line(),
            message: de.to_string(),
        };
    }
    Error::Csv {
        path: PathBuf::from(path),
        source: err,
    }
}
