use super::render;
use crate::api::{
    fetch_dashboard, LatencyProfile, NoiseSource, RandomNoise, SimulatedProvider,
    MAX_HISTORY_DAYS,
};
use crate::aqi::{recommendation_for, SeverityLevel};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::locations::LocationDirectory;
use crate::models::Location;
use clap::{Args, Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// CLI dashboard for simulated air quality readings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Run a single command; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Everything for one location: current, forecast, trend, weather and prediction
    Dashboard(HistoryArgs),

    /// Current AQI with health advice
    Current(LocationArgs),

    /// AQI forecast for today and the next six days
    Forecast(LocationArgs),

    /// Daily AQI history ending today
    History(HistoryArgs),

    /// Weather conditions that affect air quality
    Weather(LocationArgs),

    /// Pollutant-based AQI prediction
    Predict(LocationArgs),

    /// Search locations by name (lists all when the query is empty)
    Search {
        /// Case-insensitive part of a location name
        query: Option<String>,
    },

    /// AQI levels, their ranges, colours and health advice
    Levels,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LocationArgs {
    /// Location name or part of it (default location when omitted)
    #[arg(short, long)]
    pub location: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct HistoryArgs {
    /// Location name or part of it (default location when omitted)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Number of days of history, at most 3650 (default: AQI_HISTORY_DAYS or 30)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_HISTORY_DAYS)))]
    pub days: Option<u32>,
}

/// CLI application
pub struct App {
    provider: SimulatedProvider,
    config: Config,
}

impl App {
    /// Builds the directory and provider described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let directory = LocationDirectory::builtin_with_default(&config.default_location)?;

        let noise: Arc<dyn NoiseSource> = match config.seed {
            Some(seed) => Arc::new(RandomNoise::seeded(seed)),
            None => Arc::new(RandomNoise::from_entropy()),
        };
        let latency = if config.simulate_latency {
            LatencyProfile::realistic()
        } else {
            LatencyProfile::none()
        };

        let provider = SimulatedProvider::new(Arc::new(directory))
            .with_noise(noise)
            .with_latency(latency);

        Ok(Self::with_provider(provider, config))
    }

    pub fn with_provider(provider: SimulatedProvider, config: Config) -> Self {
        Self { provider, config }
    }

    pub fn directory(&self) -> &LocationDirectory {
        self.provider.directory()
    }

    pub fn history_days(&self) -> u32 {
        self.config.history_days
    }

    /// Run one command, printing tables or JSON to stdout
    pub async fn run_command(&self, command: Commands, json: bool) -> Result<()> {
        match command {
            Commands::Dashboard(args) => self.show_dashboard(args, json).await,
            Commands::Current(args) => self.show_current(args.location.as_deref(), json).await,
            Commands::Forecast(args) => self.show_forecast(args.location.as_deref(), json).await,
            Commands::History(args) => self.show_history(args, json).await,
            Commands::Weather(args) => self.show_weather(args.location.as_deref(), json).await,
            Commands::Predict(args) => self.show_prediction(args.location.as_deref(), json).await,
            Commands::Search { query } => {
                self.show_search(query.as_deref().unwrap_or_default(), json)
                    .await
            },
            Commands::Levels => self.show_levels(json),
        }
    }

    /// Resolves a name, surfacing `LocationNotFound` before anything is generated.
    fn resolve(&self, name: Option<&str>) -> Result<Location> {
        self.directory().resolve(name).cloned().ok_or_else(|| {
            let name = name.unwrap_or_default().to_string();
            warn!("Location not found: {}", name);
            AppError::LocationNotFound(name)
        })
    }

    async fn show_dashboard(&self, args: HistoryArgs, json: bool) -> Result<()> {
        let days = args.days.unwrap_or(self.config.history_days);
        let snapshot = spin(
            "Fetching air quality dashboard...",
            json,
            fetch_dashboard(&self.provider, args.location.as_deref(), days),
        )
        .await??;

        if json {
            return print_json(&snapshot);
        }

        println!(
            "{}",
            render::current_summary(&snapshot.current, snapshot.recommendation)
        );
        println!("\n{}", "Weather".bold());
        println!("{}", render::weather_table(&snapshot.weather));
        println!("\n{}", "AQI Prediction".bold());
        println!("{}", render::prediction_table(&snapshot.prediction));
        println!("\n{}", "7-Day Forecast".bold());
        println!("{}", render::forecast_table(&snapshot.forecast));
        println!("\n{}", render::trend_chart(&snapshot.historical));
        Ok(())
    }

    async fn show_current(&self, name: Option<&str>, json: bool) -> Result<()> {
        let reading = spin(
            "Fetching current air quality...",
            json,
            self.provider.current_reading(name),
        )
        .await?
        .ok_or_else(|| AppError::LocationNotFound(name.unwrap_or_default().to_string()))?;
        let advice = recommendation_for(reading.level);

        if json {
            #[derive(Serialize)]
            struct CurrentWithAdvice<'a> {
                #[serde(flatten)]
                reading: &'a crate::models::CurrentReading,
                recommendation: &'a crate::aqi::HealthRecommendation,
            }
            return print_json(&CurrentWithAdvice {
                reading: &reading,
                recommendation: advice,
            });
        }
        println!("{}", render::current_summary(&reading, advice));
        Ok(())
    }

    async fn show_forecast(&self, name: Option<&str>, json: bool) -> Result<()> {
        let location = self.resolve(name)?;
        let forecast = spin("Fetching forecast...", json, self.provider.forecast(&location)).await?;

        if json {
            return print_json(&forecast);
        }
        println!("7-day AQI forecast for {}", location.name.cyan().bold());
        println!("{}", render::forecast_table(&forecast));
        Ok(())
    }

    async fn show_history(&self, args: HistoryArgs, json: bool) -> Result<()> {
        let location = self.resolve(args.location.as_deref())?;
        let days = args.days.unwrap_or(self.config.history_days);
        let history = spin(
            "Fetching historical data...",
            json,
            self.provider.historical(days, &location),
        )
        .await?;

        if json {
            return print_json(&history);
        }
        println!("{}-day AQI history for {}", days, location.name.cyan().bold());
        println!("{}", render::history_table(&history));
        println!("\n{}", render::trend_chart(&history));
        Ok(())
    }

    async fn show_weather(&self, name: Option<&str>, json: bool) -> Result<()> {
        let location = self.resolve(name)?;
        let weather = spin("Fetching weather...", json, self.provider.weather(&location)).await?;

        if json {
            return print_json(&weather);
        }
        println!("Weather in {}", location.name.cyan().bold());
        println!("{}", render::weather_table(&weather));
        Ok(())
    }

    async fn show_prediction(&self, name: Option<&str>, json: bool) -> Result<()> {
        let location = self.resolve(name)?;
        let prediction = spin(
            "Calculating AQI prediction...",
            json,
            self.provider.predict(&location),
        )
        .await?;

        if json {
            return print_json(&prediction);
        }
        println!("AQI prediction for {}", location.name.cyan().bold());
        println!("{}", render::prediction_table(&prediction));
        Ok(())
    }

    async fn show_search(&self, query: &str, json: bool) -> Result<()> {
        let results = spin("Searching locations...", json, self.provider.search(query)).await?;
        info!("Search {:?} returned {} locations", query, results.len());

        if json {
            return print_json(&results);
        }
        if results.is_empty() {
            println!("{}", format!("No locations match \"{}\"", query).yellow());
            return Ok(());
        }
        println!("{}", render::locations_table(&results));
        Ok(())
    }

    fn show_levels(&self, json: bool) -> Result<()> {
        let recommendations: Vec<_> = SeverityLevel::ALL
            .iter()
            .map(|level| recommendation_for(*level))
            .collect();

        if json {
            return print_json(&recommendations);
        }
        println!("{}", render::levels_table(&recommendations));
        Ok(())
    }
}

/// Awaits `task` behind a spinner on stderr. No spinner in JSON mode.
async fn spin<F: Future>(message: &str, json: bool, task: F) -> Result<F::Output> {
    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };
    spinner.set_message(message.to_string());

    let output = task.await;
    spinner.finish_and_clear();
    Ok(output)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FixedClock, MidpointNoise};
    use chrono::{TimeZone, Utc};

    // --- Test Application ---
    // Deterministic provider without latency so commands run instantly
    fn test_app() -> App {
        let provider = SimulatedProvider::new(Arc::new(LocationDirectory::builtin()))
            .with_noise(Arc::new(MidpointNoise))
            .with_clock(Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
            )))
            .with_latency(LatencyProfile::none());
        let config = Config {
            simulate_latency: false,
            ..Config::default()
        };
        App::with_provider(provider, config)
    }

    fn location(name: &str) -> LocationArgs {
        LocationArgs {
            location: Some(name.to_string()),
        }
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["aqi-dashboard", "history", "-l", "Delhi", "-d", "7", "--json"]);
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Commands::History(HistoryArgs {
                location: Some("Delhi".to_string()),
                days: Some(7),
            }))
        );

        let cli = Cli::parse_from(["aqi-dashboard"]);
        assert_eq!(cli.command, None);

        let cli = Cli::parse_from(["aqi-dashboard", "search"]);
        assert_eq!(cli.command, Some(Commands::Search { query: None }));
    }

    #[test]
    fn test_cli_bounds_history_days() {
        let cli = Cli::parse_from(["aqi-dashboard", "dashboard", "-d", "3650"]);
        assert_eq!(
            cli.command,
            Some(Commands::Dashboard(HistoryArgs {
                location: None,
                days: Some(MAX_HISTORY_DAYS),
            }))
        );

        for days in ["3651", "100000000", "-1"] {
            let result = Cli::try_parse_from(["aqi-dashboard", "history", "-d", days]);
            assert!(result.is_err(), "{} days should be rejected", days);
        }
    }

    #[test]
    fn test_app_new_rejects_unknown_default_location() {
        let config = Config {
            default_location: "Atlantis".to_string(),
            ..Config::default()
        };
        assert!(matches!(App::new(config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_app_new_uses_configured_default() {
        let config = Config {
            default_location: "Mumbai".to_string(),
            seed: Some(1),
            ..Config::default()
        };
        let app = App::new(config).unwrap();
        assert_eq!(app.directory().default_location().name, "Mumbai, Maharashtra");
        assert_eq!(app.history_days(), 30);
    }

    #[tokio::test]
    async fn test_commands_succeed_for_known_location() {
        let app = test_app();
        for json in [false, true] {
            assert!(app.run_command(Commands::Current(location("Delhi")), json).await.is_ok());
            assert!(app.run_command(Commands::Forecast(location("Delhi")), json).await.is_ok());
            assert!(app.run_command(Commands::Weather(location("Delhi")), json).await.is_ok());
            assert!(app.run_command(Commands::Predict(location("Delhi")), json).await.is_ok());
            let history = Commands::History(HistoryArgs {
                location: Some("Delhi".to_string()),
                days: Some(5),
            });
            assert!(app.run_command(history, json).await.is_ok());
            let dashboard = Commands::Dashboard(HistoryArgs {
                location: None,
                days: None,
            });
            assert!(app.run_command(dashboard, json).await.is_ok());
            assert!(app.run_command(Commands::Levels, json).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_commands_report_unknown_location() {
        let app = test_app();
        let commands = vec![
            Commands::Current(location("Atlantis")),
            Commands::Forecast(location("Atlantis")),
            Commands::Weather(location("Atlantis")),
            Commands::Predict(location("Atlantis")),
            Commands::History(HistoryArgs {
                location: Some("Atlantis".to_string()),
                days: None,
            }),
            Commands::Dashboard(HistoryArgs {
                location: Some("Atlantis".to_string()),
                days: None,
            }),
        ];
        for command in commands {
            match app.run_command(command.clone(), true).await {
                Err(AppError::LocationNotFound(name)) => assert_eq!(name, "Atlantis"),
                other => panic!("Expected LocationNotFound for {:?}, got {:?}", command, other),
            }
        }
    }

    #[tokio::test]
    async fn test_search_never_fails() {
        let app = test_app();
        let empty = Commands::Search { query: None };
        assert!(app.run_command(empty, false).await.is_ok());
        let miss = Commands::Search {
            query: Some("zzz".to_string()),
        };
        assert!(app.run_command(miss, false).await.is_ok());
    }
}
