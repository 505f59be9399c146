//! End-to-end tests for the headless CLI.
//!
//! Each test writes a small listings CSV into a temp dir and runs the
//! compiled binary against it with `--data`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const LISTINGS_CSV: &str = "\
name,host_name,country,property_type,room_type,price,availability_365,review_scores
Sunny loft,Ana,Spain,Loft,Entire home/apt,120,200,95
Harbour room,Ben,Portugal,Apartment,Private room,45,30,
Beach house,Cara,Brazil,House,Entire home/apt,300,90,99
Hostel bunk,Dan,Brazil,Hostel,Shared room,15,300,70
";

struct TestFixture {
    temp_dir: TempDir,
    csv: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let csv = temp_dir.path().join("listings.csv");
        std::fs::write(&csv, LISTINGS_CSV).expect("Failed to write csv");
        Self { temp_dir, csv }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_airbnb-dash"))
            .arg("--cli")
            .args(args)
            .arg("--data")
            .arg(&self.csv)
            .output()
            .expect("Failed to run airbnb-dash")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_values_lists_distinct_sorted() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["values", "country"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Brazil\nPortugal\nSpain\n");
}

#[test]
fn test_render_statistics_text() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["render", "statistics", "--country", "Brazil"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("STATISTICS"));
    assert!(text.contains("2 of 4 listings"));
    assert!(text.contains("== Top 10 Property Types (bar-horizontal) =="));
}

#[test]
fn test_render_analysis_json() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["render", "analysis", "--json", "--price-max", "100"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["view"], "ANALYSIS");
    assert_eq!(value["matched"], 2);
    assert_eq!(value["total"], 4);
    assert_eq!(value["charts"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_price_bounds_are_clamped_and_ordered() {
    let fixture = TestFixture::new();
    let output = fixture.run(&[
        "render",
        "analysis",
        "--json",
        "--price-min",
        "500",
        "--price-max",
        "100",
    ]);
    assert!(output.status.success());

    // 500 clamps to the observed max of 300, then the bounds swap to 100-300
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["matched"], 2);
}

#[test]
fn test_empty_selection_renders_empty_charts() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["render", "analysis", "--room-type", ""]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("0 of 4 listings"));
    assert_eq!(text.matches("(no data)").count(), 4);
}

#[test]
fn test_export_csv_by_extension() {
    let fixture = TestFixture::new();
    let out = fixture.path("analysis.csv");
    let output = fixture.run(&["export", "analysis", out.to_str().unwrap()]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("View,Chart,Kind,Key,Value"));
    assert!(written.contains("ANALYSIS,Avg price in each country,scatter-geo,Spain,120"));
}

#[test]
fn test_export_explicit_json_format() {
    let fixture = TestFixture::new();
    let out = fixture.path("stats.out");
    let output = fixture.run(&["export", "stats", out.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());
    assert!(read_json(&out)["charts"].is_array());
}

#[test]
fn test_missing_dataset_fails() {
    let fixture = TestFixture::new();
    let output = Command::new(env!("CARGO_BIN_EXE_airbnb-dash"))
        .args(["--cli", "values", "country", "--data"])
        .arg(fixture.path("missing.csv"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not load listings"));
}

#[test]
fn test_bad_arguments_exit_with_error() {
    let fixture = TestFixture::new();
    let output = fixture.run(&["render", "charts"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid view"));
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
