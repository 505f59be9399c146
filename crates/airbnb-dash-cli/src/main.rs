//! airbnb-dash - Interactive Airbnb listings dashboard
//!
//! Usage:
//!   airbnb-dash [--data <csv>]              Run TUI mode (default)
//!   airbnb-dash --cli <cmd>                 Run CLI mode (headless)
//!   airbnb-dash --help                      Show help

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airbnb_dash_core::{Config, Dataset};

mod app;
mod cli;
mod event;
mod screens;
pub mod theme;
mod tui;
mod widgets;

use app::App;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") && !args.iter().any(|a| a == "--cli") {
        print_help();
        return Ok(());
    }

    // Check for --cli flag
    if let Some(cli_pos) = args.iter().position(|a| a == "--cli") {
        let cli_args: Vec<String> = args.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        init_cli_logging();
        match cli::parse_args(&cli_args) {
            Ok((command, options)) => {
                return cli::run(command, options);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    // Default: TUI mode
    let data_override = match data_arg(&args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging();
    let config = Config::load();
    let path = data_override.unwrap_or_else(|| config.dataset_path());
    // Load before touching the terminal so errors print normally
    let dataset = Dataset::load(&path)
        .map_err(|e| anyhow::anyhow!("Could not load listings from {}: {}", path.display(), e))?;

    tui::install_panic_hook();
    let result = run(dataset, config);
    tui::restore()?;
    result
}

fn print_help() {
    println!("airbnb-dash v{}", env!("CARGO_PKG_VERSION"));
    println!("Filter and chart Airbnb listings");
    println!();
    println!("USAGE:");
    println!("    airbnb-dash [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --data <csv>    Listings file (default: config or ./airbnb_data.csv)");
    println!("    --cli <cmd>     Run in CLI mode (headless, for scripting)");
    println!("    --help          Show this help message");
    println!();
    println!("By default, airbnb-dash runs in TUI (terminal) mode.");
    println!();
    println!("For CLI mode help: airbnb-dash --cli --help");
}

/// Value of `--data`, if given
fn data_arg(args: &[String]) -> Result<Option<PathBuf>, String> {
    match args.iter().position(|a| a == "--data") {
        Some(pos) => args
            .get(pos + 1)
            .map(|p| Some(PathBuf::from(p)))
            .ok_or_else(|| "--data requires a path".to_string()),
        None => Ok(None),
    }
}

fn init_logging() {
    // For TUI apps, log to a file to avoid corrupting the terminal display
    // Try to create a log file, fall back to no logging if it fails
    if let Ok(log_file) = File::create("airbnb-dash.log") {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn init_cli_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(dataset: Dataset, config: Config) -> anyhow::Result<()> {
    theme::set_theme(config.theme);

    // Initialize terminal
    let mut terminal = tui::init()?;

    let mut app = App::new(dataset, config);

    // Main event loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(key) = event::poll(Duration::from_millis(100))? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
