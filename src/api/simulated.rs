//! Provides a simulated data provider for plausible air quality and weather readings.
//!
//! There is no live sensor feed behind the dashboard. Every reading is produced here
//! from regional and seasonal baselines plus bounded uniform noise, then clamped and
//! classified. The noise source, clock and artificial latency are injectable so that
//! tests can pin the output down exactly.

use super::clock::{Clock, SystemClock};
use super::latency::{simulate, LatencyProfile};
use super::noise::{pick, NoiseSource, RandomNoise};
use super::prediction::{apply_seasonal_adjustment, predicted_aqi, POLLUTANT_VARIATION};
use super::profile::{
    current_aqi_spread, forecast_baseline, historical_baseline, pollutant_baseline,
    weather_baseline,
};
use crate::aqi::AQI_SCALE_MAX;
use crate::locations::LocationDirectory;
use crate::models::{
    CurrentReading, ForecastDay, HistoricalPoint, Location, Pollutant, PollutantLevels,
    PredictionOutput, WeatherReading, WindDirection,
};
use chrono::{DateTime, Datelike, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of days in a forecast, today included.
pub const FORECAST_DAYS: i64 = 7;

/// Default historical window in days (the series has one extra point for today).
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Longest historical window generated; larger requests are capped to it.
pub const MAX_HISTORY_DAYS: u32 = 3650;

const FORECAST_NOISE: f64 = 20.0;
const HISTORY_NOISE: f64 = 25.0;
const HISTORY_TREND_AMPLITUDE: f64 = 30.0;
/// Days per radian of the historical trend, giving a period of about 63 days.
const HISTORY_TREND_STRETCH: f64 = 10.0;

const TEMPERATURE_NOISE: f64 = 3.0;
const HUMIDITY_NOISE: f64 = 10.0;
const WIND_NOISE: f64 = 3.0;
const PRECIPITATION_NOISE: f64 = 2.0;

/// Generates simulated readings for locations in a `LocationDirectory`.
///
/// Calls share no mutable state beyond the noise source, so any number of them
/// may run concurrently.
#[derive(Clone)]
pub struct SimulatedProvider {
    directory: Arc<LocationDirectory>,
    noise: Arc<dyn NoiseSource>,
    clock: Arc<dyn Clock>,
    latency: LatencyProfile,
}

impl SimulatedProvider {
    /// Creates a provider with entropy-seeded noise, the system clock and realistic latency.
    pub fn new(directory: Arc<LocationDirectory>) -> Self {
        debug!("Creating SimulatedProvider");
        Self {
            directory,
            noise: Arc::new(RandomNoise::from_entropy()),
            clock: Arc::new(SystemClock),
            latency: LatencyProfile::realistic(),
        }
    }

    pub fn with_noise(mut self, noise: Arc<dyn NoiseSource>) -> Self {
        self.noise = noise;
        self
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn directory(&self) -> &LocationDirectory {
        &self.directory
    }

    /// Resolves `name` and generates its current AQI reading.
    ///
    /// An absent name uses the directory's default location. Returns `None` when a
    /// name is given but matches no location; no reading is synthesized in that case.
    pub async fn current_reading(&self, name: Option<&str>) -> Option<CurrentReading> {
        simulate(self.latency.current).await;

        let Some(location) = self.directory.resolve(name) else {
            warn!("No location matches {:?}", name.unwrap_or_default());
            return None;
        };

        let spread = current_aqi_spread(location.region);
        let offset = self.noise.sample(0.0, f64::from(spread.span)).floor();
        let aqi = spread.base + offset as u32;
        let main_pollutant = pick(self.noise.as_ref(), &Pollutant::ALL);

        info!(
            "Current AQI for {}: {} ({})",
            location.name, aqi, main_pollutant
        );
        Some(CurrentReading::new(
            aqi,
            main_pollutant,
            self.clock.now(),
            location.clone(),
        ))
    }

    /// Seven independent daily forecasts, today first.
    pub async fn forecast(&self, location: &Location) -> Vec<ForecastDay> {
        simulate(self.latency.forecast).await;

        let today = self.clock.now().date_naive();
        let baseline = forecast_baseline(location.region);
        debug!(
            "Generating {}-day forecast for {} around {}",
            FORECAST_DAYS, location.name, baseline
        );

        (0..FORECAST_DAYS)
            .map(|offset| {
                let variation = self.noise.sample(-FORECAST_NOISE, FORECAST_NOISE).floor();
                ForecastDay::new(today + Duration::days(offset), clamp_aqi(baseline + variation))
            })
            .collect()
    }

    /// `days + 1` daily points, oldest first, ending now.
    ///
    /// Each value is the seasonal baseline plus a slow sine trend and uniform noise.
    /// `days` above `MAX_HISTORY_DAYS` is capped, and timestamps before the earliest
    /// representable instant saturate to it.
    pub async fn historical(&self, days: u32, location: &Location) -> Vec<HistoricalPoint> {
        simulate(self.latency.historical).await;

        if days > MAX_HISTORY_DAYS {
            warn!(
                "Requested {} days of history, capping at {}",
                days, MAX_HISTORY_DAYS
            );
        }
        let days = days.min(MAX_HISTORY_DAYS);
        let now = self.clock.now();
        let baseline = historical_baseline(location.region, now.month());
        debug!(
            "Generating {} days of history for {} around {}",
            days, location.name, baseline
        );

        (0..=i64::from(days))
            .rev()
            .map(|offset| {
                let trend = (offset as f64 / HISTORY_TREND_STRETCH).sin() * HISTORY_TREND_AMPLITUDE;
                let variation = self.noise.sample(-HISTORY_NOISE, HISTORY_NOISE).floor();
                let aqi = clamp_aqi((baseline + trend + variation).floor());
                let timestamp = now
                    .checked_sub_signed(Duration::days(offset))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                HistoricalPoint::new(timestamp, aqi)
            })
            .collect()
    }

    /// Current weather around the regional and seasonal baseline.
    pub async fn weather(&self, location: &Location) -> WeatherReading {
        simulate(self.latency.weather).await;

        let base = weather_baseline(location.region, self.clock.now().month());
        let jitter = |value: f64, spread: f64| value + self.noise.sample(-spread, spread);

        let reading = WeatherReading {
            temperature: jitter(base.temperature, TEMPERATURE_NOISE).floor() as i32,
            humidity: jitter(base.humidity, HUMIDITY_NOISE).floor() as i32,
            wind_speed: jitter(base.wind_speed, WIND_NOISE).floor() as i32,
            wind_direction: pick(self.noise.as_ref(), &WindDirection::ALL),
            precipitation: jitter(base.precipitation, PRECIPITATION_NOISE).max(0.0),
        };
        debug!("Weather for {}: {:?}", location.name, reading);
        reading
    }

    /// Predicts an AQI score from seasonal pollutant baselines.
    ///
    /// Always samples a fresh weather reading for the temperature, humidity and
    /// wind fields rather than reusing an earlier one.
    pub async fn predict(&self, location: &Location) -> PredictionOutput {
        simulate(self.latency.prediction).await;

        let month = self.clock.now().month();
        let baseline = apply_seasonal_adjustment(pollutant_baseline(location.region), month);
        let weather = self.weather(location).await;

        let vary = |value: f64| {
            let factor = 1.0 + self.noise.sample(-POLLUTANT_VARIATION, POLLUTANT_VARIATION);
            (value * factor).max(0.0)
        };
        let pollutants = PollutantLevels {
            pm10: vary(baseline.pm10),
            co: vary(baseline.co),
            no2: vary(baseline.no2),
            so2: vary(baseline.so2),
            o3: vary(baseline.o3),
        };
        let predicted_aqi = predicted_aqi(&pollutants);

        info!("Predicted AQI for {}: {}", location.name, predicted_aqi);
        PredictionOutput {
            pollutants,
            temperature: weather.temperature,
            humidity: weather.humidity,
            wind_speed: weather.wind_speed,
            predicted_aqi,
            timestamp: self.clock.now(),
        }
    }

    /// Searches the directory after the simulated lookup delay.
    pub async fn search(&self, query: &str) -> Vec<Location> {
        simulate(self.latency.search).await;
        let results = self.directory.search(query);
        debug!("Search {:?} matched {} locations", query, results.len());
        results
    }
}

/// Clamps a generated value onto the 0..=500 AQI scale.
fn clamp_aqi(value: f64) -> u32 {
    value.clamp(0.0, f64::from(AQI_SCALE_MAX)) as u32
}
