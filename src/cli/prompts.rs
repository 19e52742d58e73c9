//! Interactive prompts used by the menu loop.

use crate::api::MAX_HISTORY_DAYS;
use crate::error::Result;
use crate::locations::LocationDirectory;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};

/// Fuzzy picker over the directory, starting on the default location.
///
/// Returns `None` if the user cancels (Esc / Ctrl+C).
pub fn prompt_location(directory: &LocationDirectory) -> Result<Option<String>> {
    let names: Vec<&str> = directory.all().iter().map(|l| l.name.as_str()).collect();
    let default = names
        .iter()
        .position(|name| *name == directory.default_location().name)
        .unwrap_or(0);

    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a location (type to filter)")
        .items(&names)
        .default(default)
        .interact_opt()?;

    Ok(choice.map(|i| names[i].to_string()))
}

pub fn prompt_days(default: u32) -> Result<u32> {
    let days = Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt("Number of days of history")
        .default(default)
        .validate_with(|days: &u32| -> std::result::Result<(), String> {
            if *days <= MAX_HISTORY_DAYS {
                Ok(())
            } else {
                Err(format!("At most {} days", MAX_HISTORY_DAYS))
            }
        })
        .interact_text()?;
    Ok(days)
}

/// Free-text search query; empty lists every location.
pub fn prompt_query() -> Result<String> {
    let query = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Search locations (leave empty to list all)")
        .allow_empty(true)
        .interact_text()?;
    Ok(query)
}
