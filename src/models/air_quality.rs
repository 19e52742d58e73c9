//! Defines data structures for the dashboard.
//!
//! Includes structs for:
//! - The static location catalog (`Location`, `Coordinates`, `Region`).
//! - Generated readings (`CurrentReading`, `ForecastDay`, `HistoricalPoint`, `WeatherReading`).
//! - The pollutant-based prediction (`PollutantLevels`, `PredictionOutput`).
//!
//! Every reading that carries an AQI value also carries its `SeverityLevel`; the
//! constructors derive the level from the value so the pair can never disagree.

use crate::aqi::{classify, SeverityLevel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents geographical coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Regional profile tag used to pick environmental baselines for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Delhi,
    Mumbai,
    Kolkata,
    Chennai,
    Coimbatore,
    /// Any other Tamil Nadu district.
    TamilNadu,
    Other,
}

impl Region {
    /// Whether the region belongs to the Tamil Nadu state group.
    pub fn is_tamil_nadu(self) -> bool {
        matches!(self, Region::Chennai | Region::Coimbatore | Region::TamilNadu)
    }
}

/// A named place in the location directory. Identity is the name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Human readable name, "City, Region" convention.
    pub name: String,
    pub coordinates: Coordinates,
    pub region: Region,
}

impl Location {
    pub fn new(name: &str, latitude: f64, longitude: f64, region: Region) -> Self {
        Self {
            name: name.to_string(),
            coordinates: Coordinates {
                latitude,
                longitude,
            },
            region,
        }
    }
}

/// Pollutants that can be reported as the dominant one in a current reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "CO")]
    Co,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The latest AQI reading for a resolved location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentReading {
    pub aqi: u32,
    pub level: SeverityLevel,
    pub main_pollutant: Pollutant,
    pub timestamp: DateTime<Utc>,
    pub location: Location,
}

impl CurrentReading {
    pub fn new(
        aqi: u32,
        main_pollutant: Pollutant,
        timestamp: DateTime<Utc>,
        location: Location,
    ) -> Self {
        Self {
            aqi,
            level: classify(aqi),
            main_pollutant,
            timestamp,
            location,
        }
    }
}

/// One day of the seven-day AQI forecast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub aqi: u32,
    pub level: SeverityLevel,
}

impl ForecastDay {
    pub fn new(date: NaiveDate, aqi: u32) -> Self {
        Self {
            date,
            aqi,
            level: classify(aqi),
        }
    }
}

/// One daily point of the historical AQI trend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    pub timestamp: DateTime<Utc>,
    pub aqi: u32,
    pub level: SeverityLevel,
}

impl HistoricalPoint {
    pub fn new(timestamp: DateTime<Utc>, aqi: u32) -> Self {
        Self {
            timestamp,
            aqi,
            level: classify(aqi),
        }
    }
}

/// The eight compass points a wind direction is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Weather conditions that influence air quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: i32,
    /// Relative humidity, percent.
    pub humidity: i32,
    /// km/h.
    pub wind_speed: i32,
    pub wind_direction: WindDirection,
    /// Millimetres, never negative.
    pub precipitation: f64,
}

/// Concentrations of the five pollutants feeding the predicted AQI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantLevels {
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
}

/// Result of the pollutant-based AQI prediction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    #[serde(flatten)]
    pub pollutants: PollutantLevels,
    pub temperature: i32,
    pub humidity: i32,
    pub wind_speed: i32,
    /// Not clamped to the 0..=500 AQI scale.
    #[serde(rename = "predictedAQI")]
    pub predicted_aqi: u32,
    pub timestamp: DateTime<Utc>,
}

impl PredictionOutput {
    /// Level of the predicted score; anything above 500 reads as hazardous.
    pub fn level(&self) -> SeverityLevel {
        classify(self.predicted_aqi)
    }
}
