mod api;
mod aqi;
mod cli;
mod config;
mod error;
mod locations;
mod logging;
mod models;

use clap::Parser;
use cli::{App, Cli, Commands, HistoryArgs, LocationArgs};
use colored::*;
use config::Config;
use dialoguer::{theme::ColorfulTheme, Select};
use error::Result;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e.to_string().red());
            return Err(e);
        },
    };

    // Initialize logging; the guard flushes file logs on exit
    let _log_guard = logging::init(&config.log);

    info!("Initializing air quality dashboard...");

    let app = match App::new(config) {
        Ok(app) => {
            info!("Application initialized successfully.");
            app
        },
        Err(e) => {
            error!("Failed to initialize application: {:?}", e);
            println!(
                "{}",
                "Error: Failed to initialize application. Check logs.".red()
            );
            return Err(e);
        },
    };

    // One-shot mode
    if let Some(command) = args.command {
        return app.run_command(command, args.json).await;
    }

    println!("{}", "Welcome to the Air Quality Dashboard!".cyan().bold());

    // Main interactive loop
    loop {
        let options = &[
            "Show Dashboard",
            "Current Air Quality",
            "7-Day Forecast",
            "Historical Trend",
            "Weather Conditions",
            "AQI Prediction",
            "Search Locations",
            "AQI Levels & Health Advice",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(options)
            .default(0)
            .interact_opt()? // Use interact_opt to handle cancellation (e.g., Ctrl+C)
            .unwrap_or(options.len() - 1); // Default to Exit if cancelled

        println!("\n---\n");

        let command = match selection {
            0 | 3 => {
                let Some(location) = prompt_or_skip(cli::prompt_location(app.directory())) else {
                    continue;
                };
                let Some(days) = prompt_or_skip(cli::prompt_days(app.history_days()).map(Some))
                else {
                    continue;
                };
                let args = HistoryArgs {
                    location: Some(location),
                    days: Some(days),
                };
                if selection == 0 {
                    Commands::Dashboard(args)
                } else {
                    Commands::History(args)
                }
            },
            1 | 2 | 4 | 5 => {
                let Some(location) = prompt_or_skip(cli::prompt_location(app.directory())) else {
                    continue;
                };
                let args = LocationArgs {
                    location: Some(location),
                };
                match selection {
                    1 => Commands::Current(args),
                    2 => Commands::Forecast(args),
                    4 => Commands::Weather(args),
                    _ => Commands::Predict(args),
                }
            },
            6 => match cli::prompt_query() {
                Ok(query) => Commands::Search { query: Some(query) },
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            7 => Commands::Levels,
            8 => {
                println!("{}", "Exiting application. Goodbye!".green());
                break;
            },
            _ => unreachable!(), // Should not happen with the current setup
        };

        // Handle potential errors from command execution
        if let Err(e) = app.run_command(command, false).await {
            error!("Command execution failed: {:?}", e);
            println!(
                "{} {}",
                "Error executing command:".red(),
                e.to_string().red()
            );
        }

        println!("\n---\n");
    }

    Ok(())
}

/// Unwraps a prompt answer, reporting failures; `None` means go back to the menu.
fn prompt_or_skip<T>(answer: Result<Option<T>>) -> Option<T> {
    match answer {
        Ok(value) => value,
        Err(e) => {
            println!("{} {}", "Failed to get input:".red(), e);
            None
        },
    }
}
