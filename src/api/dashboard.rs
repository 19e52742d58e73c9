use super::SimulatedProvider;
use crate::aqi::{recommendation_for, HealthRecommendation};
use crate::error::{AppError, Result};
use crate::models::{CurrentReading, ForecastDay, HistoricalPoint, PredictionOutput, WeatherReading};
use serde::Serialize;
use tracing::info;

/// Everything the dashboard shows for one location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub current: CurrentReading,
    pub recommendation: &'static HealthRecommendation,
    pub forecast: Vec<ForecastDay>,
    pub historical: Vec<HistoricalPoint>,
    pub weather: WeatherReading,
    pub prediction: PredictionOutput,
}

/// Resolves the location through its current reading, then fetches the rest concurrently.
///
/// # Errors
///
/// Returns `AppError::LocationNotFound` if `name` matches no location. Nothing
/// else is fetched in that case.
pub async fn fetch_dashboard(
    provider: &SimulatedProvider,
    name: Option<&str>,
    days: u32,
) -> Result<DashboardSnapshot> {
    let current = provider
        .current_reading(name)
        .await
        .ok_or_else(|| AppError::LocationNotFound(name.unwrap_or_default().to_string()))?;
    let location = current.location.clone();
    info!("Fetching dashboard for {}", location.name);

    let (forecast, historical, weather, prediction) = tokio::join!(
        provider.forecast(&location),
        provider.historical(days, &location),
        provider.weather(&location),
        provider.predict(&location),
    );

    Ok(DashboardSnapshot {
        recommendation: recommendation_for(current.level),
        current,
        forecast,
        historical,
        weather,
        prediction,
    })
}
