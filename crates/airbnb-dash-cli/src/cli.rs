//! CLI/headless mode for scripting and testing
//!
//! Usage:
//!   airbnb-dash --cli render <view>               Print the charts of a view
//!   airbnb-dash --cli export <view> <path>        Write the charts of a view
//!   airbnb-dash --cli values <column>             List distinct values
//!
//! Filters: --country, --property-type, --room-type (comma-separated),
//! --price-min, --price-max
//!
//! Options:
//!   --data <path>      Listings CSV
//!   --format <fmt>     Export format (json, csv)
//!   --top-n <n>        Groups kept by ranking charts
//!   --json             Output in JSON format

use std::path::{Path, PathBuf};

use anyhow::Context;

use airbnb_dash_core::dashboard::HOME_SECTIONS;
use airbnb_dash_core::export::to_json;
use airbnb_dash_core::{
    render_view, CategoryColumn, ChartRenderer, Config, DashboardRequest, Dataset, ExportFormat,
    FilterSpec, TextRenderer, View,
};

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Render {
        view: View,
    },
    Export {
        view: View,
        path: PathBuf,
        format: Option<ExportFormat>,
    },
    Values {
        column: CategoryColumn,
    },
}

/// Filter overrides; anything left `None` keeps its default
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    pub countries: Option<Vec<String>>,
    pub property_types: Option<Vec<String>>,
    pub room_types: Option<Vec<String>>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterArgs {
    /// Apply the overrides on top of the all-inclusive spec for `dataset`
    ///
    /// Price bounds are clamped to the observed range and never cross.
    pub fn to_spec(&self, dataset: &Dataset) -> FilterSpec {
        let mut spec = FilterSpec::all(dataset);
        let columns = [
            (CategoryColumn::Country, &self.countries),
            (CategoryColumn::PropertyType, &self.property_types),
            (CategoryColumn::RoomType, &self.room_types),
        ];
        for (column, values) in columns {
            if let Some(values) = values {
                spec = spec.with_values(column, values.iter().cloned());
            }
        }
        let min = self.price_min.unwrap_or(spec.price_min);
        let max = self.price_max.unwrap_or(spec.price_max);
        spec.set_price_range(min, max, dataset.price_range());
        spec
    }
}

/// CLI options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub json: bool,
    pub data: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub filters: FilterArgs,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut format: Option<ExportFormat> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--json" {
            options.json = true;
            i += 1;
            continue;
        }
        if !arg.starts_with("--") {
            positional.push(arg);
            i += 1;
            continue;
        }

        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{} requires a value", arg))?;
        match arg {
            "--data" => options.data = Some(PathBuf::from(value)),
            "--format" => format = Some(value.parse().map_err(|e| format!("{}", e))?),
            "--top-n" => options.top_n = Some(parse_number(arg, value)?),
            "--country" => options.filters.countries = Some(parse_list(value)),
            "--property-type" => options.filters.property_types = Some(parse_list(value)),
            "--room-type" => options.filters.room_types = Some(parse_list(value)),
            "--price-min" => options.filters.price_min = Some(parse_number(arg, value)?),
            "--price-max" => options.filters.price_max = Some(parse_number(arg, value)?),
            _ => return Err(format!("Unknown option: {}", arg)),
        }
        i += 2;
    }

    let command = match positional.as_slice() {
        ["render", view] => CliCommand::Render {
            view: parse_view(view)?,
        },
        ["export", view, path] => CliCommand::Export {
            view: parse_view(view)?,
            path: PathBuf::from(path),
            format,
        },
        ["values", column] => CliCommand::Values {
            column: column.parse().map_err(|e| format!("{}", e))?,
        },
        ["render"] => return Err("render requires a view".to_string()),
        ["export", ..] => return Err("export requires a view and a path".to_string()),
        ["values"] => return Err("values requires a column".to_string()),
        [] => {
            return Err("No command specified. Use: render, export, or values".to_string());
        }
        [other, ..] => return Err(format!("Unknown command: {}", other)),
    };

    Ok((command, options))
}

fn parse_view(s: &str) -> Result<View, String> {
    s.parse::<View>()
        .map_err(|_| format!("Invalid view '{}'. Use: home, statistics, or analysis", s))
}

/// Comma-separated values; blanks are dropped so `""` selects nothing
fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

fn parse_number<T: std::str::FromStr>(flag: &str, s: &str) -> Result<T, String> {
    s.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {}: {}", flag, s))
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load();
    let path = options.data.clone().unwrap_or_else(|| config.dataset_path());
    let dataset = Dataset::load(&path)
        .with_context(|| format!("Could not load listings from {}", path.display()))?;
    let top_n = options.top_n.unwrap_or(config.top_n);

    match command {
        CliCommand::Render { view } => run_render(&dataset, view, top_n, &options),
        CliCommand::Export { view, path, format } => {
            run_export(&dataset, view, top_n, &path, format, &options)
        }
        CliCommand::Values { column } => run_values(&dataset, column, &options),
    }
}

fn request(dataset: &Dataset, view: View, top_n: usize, options: &CliOptions) -> DashboardRequest {
    DashboardRequest::new(view, dataset)
        .with_filter(options.filters.to_spec(dataset))
        .with_top_n(top_n)
}

fn run_render(
    dataset: &Dataset,
    view: View,
    top_n: usize,
    options: &CliOptions,
) -> anyhow::Result<()> {
    let request = request(dataset, view, top_n, options);
    let rendered = render_view(dataset, &request);

    if options.json {
        println!("{}", to_json(&rendered)?);
        return Ok(());
    }

    println!("{}", view);
    if view == View::Home {
        for (heading, body) in HOME_SECTIONS {
            println!();
            println!("{}", heading);
            println!("  {}", body);
        }
        return Ok(());
    }

    println!(
        "{} of {} listings ({})",
        rendered.matched,
        rendered.total,
        request.filter.summary(dataset)
    );
    let mut renderer = TextRenderer::default();
    for text in renderer.render_all(&rendered.charts) {
        println!();
        print!("{}", text);
    }

    Ok(())
}

fn run_export(
    dataset: &Dataset,
    view: View,
    top_n: usize,
    path: &Path,
    format: Option<ExportFormat>,
    options: &CliOptions,
) -> anyhow::Result<()> {
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or_default();
    let rendered = render_view(dataset, &request(dataset, view, top_n, options));
    format
        .export(&rendered, path)
        .with_context(|| format!("Failed to export {} to {}", view, path.display()))?;

    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "view": view,
                "format": format.extension(),
                "path": path.to_string_lossy(),
                "charts": rendered.charts.len(),
            })
        );
    } else {
        println!(
            "Exported {} charts of {} as {} to {}",
            rendered.charts.len(),
            view,
            format,
            path.display()
        );
    }
    Ok(())
}

fn run_values(dataset: &Dataset, column: CategoryColumn, options: &CliOptions) -> anyhow::Result<()> {
    let values = dataset.distinct(column);
    if options.json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("airbnb-dash CLI Mode");
    println!();
    println!("USAGE:");
    println!("    airbnb-dash --cli <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    render <view>               Print the charts of a view");
    println!("    export <view> <path>        Write the charts of a view to a file");
    println!("    values <column>             List the distinct values of a column");
    println!();
    println!("VIEWS:");
    println!("    home, statistics, analysis");
    println!();
    println!("COLUMNS:");
    println!("    country, property_type, room_type, host_name");
    println!();
    println!("FILTERS:");
    println!("    --country <a,b>             Countries to include");
    println!("    --property-type <a,b>       Property types to include");
    println!("    --room-type <a,b>           Room types to include");
    println!("    --price-min <n>             Minimum price (inclusive)");
    println!("    --price-max <n>             Maximum price (inclusive)");
    println!();
    println!("OPTIONS:");
    println!("    --data <path>               Listings CSV (default: config)");
    println!("    --format <json|csv>         Export format (default: from extension)");
    println!("    --top-n <n>                 Groups kept by ranking charts");
    println!("    --json                      Output in JSON format");
    println!();
    println!("EXAMPLES:");
    println!("    airbnb-dash --cli render statistics --country Brazil,Spain");
    println!("    airbnb-dash --cli render analysis --price-max 150 --json");
    println!("    airbnb-dash --cli export analysis out.csv --room-type \"Private room\"");
    println!("    airbnb-dash --cli values room_type");
}

#[cfg(test)]
mod tests {
    use super::*;
    use airbnb_dash_core::Listing;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("Brazil, Spain"), vec!["Brazil", "Spain"]);
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_args_render() {
        let (cmd, options) = parse_args(&args(&["render", "stats", "--json"])).unwrap();
        assert_eq!(cmd, CliCommand::Render { view: View::Statistics });
        assert!(options.json);
    }

    #[test]
    fn test_parse_args_filters() {
        let (_, options) = parse_args(&args(&[
            "render",
            "analysis",
            "--country",
            "France,Spain",
            "--room-type",
            "",
            "--price-min",
            "40",
            "--data",
            "listings.csv",
        ]))
        .unwrap();
        assert_eq!(
            options.filters.countries,
            Some(vec!["France".to_string(), "Spain".to_string()])
        );
        assert_eq!(options.filters.room_types, Some(vec![]));
        assert_eq!(options.filters.price_min, Some(40.0));
        assert_eq!(options.data, Some(PathBuf::from("listings.csv")));
    }

    #[test]
    fn test_parse_args_export() {
        let (cmd, _) =
            parse_args(&args(&["export", "analysis", "out.txt", "--format", "csv"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Export {
                view: View::Analysis,
                path: PathBuf::from("out.txt"),
                format: Some(ExportFormat::Csv),
            }
        );
    }

    #[test]
    fn test_parse_args_values() {
        let (cmd, _) = parse_args(&args(&["values", "room-type"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Values {
                column: CategoryColumn::RoomType
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["render"])).is_err());
        assert!(parse_args(&args(&["render", "charts"])).is_err());
        assert!(parse_args(&args(&["render", "home", "--price-min"])).is_err());
        assert!(parse_args(&args(&["render", "home", "--price-min", "cheap"])).is_err());
        assert!(parse_args(&args(&["values", "price"])).is_err());
        assert!(parse_args(&args(&["sync"])).is_err());
    }

    #[test]
    fn test_filter_args_to_spec() {
        let row = |country: &str, price: f64| Listing {
            country: country.to_string(),
            property_type: "House".to_string(),
            room_type: "Private room".to_string(),
            price,
            ..Default::default()
        };
        let dataset = Dataset::from_listings(vec![row("France", 80.0), row("Spain", 120.0)]);

        let untouched = FilterArgs::default().to_spec(&dataset);
        assert_eq!(untouched, FilterSpec::all(&dataset));

        let spec = FilterArgs {
            countries: Some(vec!["Spain".to_string()]),
            price_max: Some(100.0),
            ..Default::default()
        }
        .to_spec(&dataset);
        assert!(spec.is_selected(CategoryColumn::Country, "Spain"));
        assert!(!spec.is_selected(CategoryColumn::Country, "France"));
        assert_eq!(spec.price_min, 80.0);
        assert_eq!(spec.price_max, 100.0);

        let outside = FilterArgs {
            price_min: Some(10.0),
            price_max: Some(900.0),
            ..Default::default()
        }
        .to_spec(&dataset);
        assert_eq!((outside.price_min, outside.price_max), (80.0, 120.0));

        let inverted = FilterArgs {
            price_min: Some(500.0),
            price_max: Some(100.0),
            ..Default::default()
        }
        .to_spec(&dataset);
        assert_eq!((inverted.price_min, inverted.price_max), (100.0, 120.0));
        assert!(inverted.price_min <= inverted.price_max);
    }
}
