//! Weather carousel CLI
//!
//! Shows current conditions and a daily forecast for a fixed set of cities.

#![allow(clippy::print_stdout)]

mod browse;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use application::{
    Carousel, DashboardService, INIT_FAILURE_MESSAGE, SlideView, slide_view,
};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, SystemClock, TelemetryConfig, WeatherAdapter, init_tracing};
use tracing::error;

/// Weather carousel CLI
#[derive(Parser)]
#[command(name = "weather-carousel")]
#[command(author, version, about = "Current weather and daily forecasts per city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "WEATHER_CAROUSEL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every configured city and print all slides
    Show {
        /// Print the slide view models as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the carousel interactively
    ///
    /// Reads commands from stdin: n/p move between slides, tab and
    /// shift-tab move the pagination focus, a number jumps to a slide.
    Browse,

    /// Print a single city
    ///
    /// Example: weather-carousel forecast "Los Angeles"
    Forecast {
        /// City name, case-insensitive
        city: String,

        /// Print the slide view model as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Verbosity flags override the configured filter only when given
fn filter_override(verbose: u8) -> Option<&'static str> {
    (verbose > 0).then(|| log_filter_from_verbosity(verbose))
}

/// Print the initialization failure and exit
fn init_failure(reason: &dyn std::fmt::Display) -> ! {
    error!(error = %reason, "Initialization failed");
    println!("{INIT_FAILURE_MESSAGE}");
    std::process::exit(1);
}

fn print_views(views: &[SlideView], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(views)?);
    } else {
        for view in views {
            println!("{}", render::slide(view));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let _ = init_tracing(&TelemetryConfig::default(), filter_override(cli.verbose));
            init_failure(&e);
        },
    };

    // Set up logging based on config and verbosity
    init_tracing(&config.telemetry, filter_override(cli.verbose))?;

    let adapter = WeatherAdapter::with_config(config.weather.to_client_config())
        .unwrap_or_else(|e| init_failure(&e));
    let service = DashboardService::new(
        Arc::new(adapter),
        Arc::new(SystemClock::new(config.dashboard.timezone)),
    );

    match cli.command {
        Commands::Show { json } => {
            let mut dashboard = service
                .start(&config.dashboard.cities)
                .unwrap_or_else(|e| init_failure(&e));
            let views: Vec<_> = dashboard.wait().await.iter().map(slide_view).collect();
            print_views(&views, json)?;
        },
        Commands::Browse => {
            let dashboard = service
                .start(&config.dashboard.cities)
                .unwrap_or_else(|e| init_failure(&e));
            let carousel = Carousel::new(dashboard.cities()).unwrap_or_else(|e| init_failure(&e));
            browse::run(carousel, dashboard).await?;
        },
        Commands::Forecast { city, json } => {
            let snapshot = service.load_named(&city).await?;
            print_views(&[slide_view(&snapshot)], json)?;
        },
    }

    Ok(())
}
