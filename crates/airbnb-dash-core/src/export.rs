//! Export functionality for rendered views

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::chart::{Chart, ChartKind};
use crate::dashboard::{RenderedView, View};
use crate::error::{Error, Result};

/// Serializable view of a chart for JSON export
#[derive(Serialize)]
struct ExportChart<'a> {
    title: &'a str,
    kind: ChartKind,
    key_label: &'a str,
    value_label: &'a str,
    points: Vec<ExportPoint>,
}

#[derive(Serialize)]
struct ExportPoint {
    key: String,
    /// `None` when the aggregate is undefined
    value: Option<f64>,
}

#[derive(Serialize)]
struct ExportView<'a> {
    view: View,
    matched: usize,
    total: usize,
    charts: Vec<ExportChart<'a>>,
}

impl<'a> From<&'a Chart> for ExportChart<'a> {
    fn from(chart: &'a Chart) -> Self {
        Self {
            title: &chart.spec.title,
            kind: chart.spec.kind,
            key_label: &chart.spec.key_label,
            value_label: &chart.spec.value_label,
            points: chart
                .data
                .rows
                .iter()
                .map(|row| ExportPoint {
                    key: row.label(),
                    value: (!row.value.is_nan()).then_some(row.value),
                })
                .collect(),
        }
    }
}

impl<'a> From<&'a RenderedView> for ExportView<'a> {
    fn from(rendered: &'a RenderedView) -> Self {
        Self {
            view: rendered.view,
            matched: rendered.matched,
            total: rendered.total,
            charts: rendered.charts.iter().map(ExportChart::from).collect(),
        }
    }
}

/// Serialize a rendered view as pretty JSON
pub fn to_json(rendered: &RenderedView) -> Result<String> {
    serde_json::to_string_pretty(&ExportView::from(rendered))
        .map_err(|e| Error::Serialize(e.to_string()))
}

/// Export a rendered view to JSON format
pub fn export_json(rendered: &RenderedView, path: &Path) -> Result<()> {
    let json = to_json(rendered)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Write a rendered view as CSV: one record per chart point
pub fn write_csv<W: Write>(rendered: &RenderedView, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| Error::Serialize(format!("CSV write error: {}", e));

    writer
        .write_record(["View", "Chart", "Kind", "Key", "Value"])
        .map_err(csv_err)?;

    for chart in &rendered.charts {
        for row in &chart.data.rows {
            let value = if row.value.is_nan() {
                String::new()
            } else {
                row.value.to_string()
            };
            writer
                .write_record([
                    rendered.view.name(),
                    chart.spec.title.as_str(),
                    chart.spec.kind.tag(),
                    row.label().as_str(),
                    value.as_str(),
                ])
                .map_err(csv_err)?;
        }
    }

    writer
        .flush()
        .map_err(|e| Error::Serialize(format!("CSV flush error: {}", e)))?;
    Ok(())
}

/// Export a rendered view to CSV format
pub fn export_csv(rendered: &RenderedView, path: &Path) -> Result<()> {
    write_csv(rendered, File::create(path)?)
}

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(Error::Config(format!("Unknown export format: {}", s))),
        }
    }
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Export a rendered view using this format
    pub fn export(&self, rendered: &RenderedView, path: &Path) -> Result<()> {
        tracing::info!("Exporting {} as {} to {}", rendered.view, self, path.display());
        match self {
            ExportFormat::Json => export_json(rendered, path),
            ExportFormat::Csv => export_csv(rendered, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{AggregateOp, AggregateRow, AggregationResult, AggregationSpec};
    use crate::chart::ChartSpec;
    use crate::listing::{CategoryColumn, NumericField};

    fn rendered() -> RenderedView {
        let spec = ChartSpec::new(
            "Avg price in each country",
            ChartKind::ScatterGeo,
            AggregationSpec::mean(CategoryColumn::Country, NumericField::Price),
        );
        RenderedView {
            view: View::Analysis,
            matched: 3,
            total: 4,
            charts: vec![Chart {
                spec,
                data: AggregationResult {
                    group_by: vec![CategoryColumn::Country],
                    op: AggregateOp::Mean(NumericField::Price),
                    rows: vec![
                        AggregateRow {
                            key: vec!["FR".into()],
                            value: 200.0,
                        },
                        AggregateRow {
                            key: vec!["US".into()],
                            value: f64::NAN,
                        },
                    ],
                },
            }],
        }
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "JSON");
        assert_eq!(format!("{}", ExportFormat::Csv), "CSV");
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::from_path(Path::new("out.JSON")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_json_nan_becomes_null() {
        let json = to_json(&rendered()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view"], "ANALYSIS");
        assert_eq!(value["charts"][0]["kind"], "scatter-geo");
        assert_eq!(value["charts"][0]["points"][0]["value"], 200.0);
        assert!(value["charts"][0]["points"][1]["value"].is_null());
    }

    #[test]
    fn test_csv_records() {
        let mut buf = Vec::new();
        write_csv(&rendered(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "View,Chart,Kind,Key,Value");
        assert_eq!(lines[1], "ANALYSIS,Avg price in each country,scatter-geo,FR,200");
        assert_eq!(lines[2], "ANALYSIS,Avg price in each country,scatter-geo,US,");
    }

    #[test]
    fn test_export_to_files() {
        let dir = tempfile::tempdir().unwrap();
        for format in ExportFormat::ALL {
            let path = dir.path().join(format!("view.{}", format.extension()));
            format.export(&rendered(), &path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
