//! Terminal rendering of readings: coloured summaries, tables and the trend chart.

use crate::aqi::{gauge_percent, HealthRecommendation, SeverityLevel};
use crate::models::{
    CurrentReading, ForecastDay, HistoricalPoint, Location, PredictionOutput, WeatherReading,
};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

/// Number of most recent days shown in the trend chart.
pub const CHART_DAYS: usize = 14;
/// The chart's vertical scale never drops below this, so clean weeks look clean.
pub const CHART_MIN_SCALE: u32 = 200;

const CHART_WIDTH: usize = 40;
const GAUGE_WIDTH: usize = 30;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn level_color(level: SeverityLevel) -> Color {
    let (r, g, b) = level.rgb();
    Color::Rgb { r, g, b }
}

fn level_cell(level: SeverityLevel) -> Cell {
    Cell::new(level.label()).fg(level_color(level))
}

fn aqi_cell(aqi: u32) -> Cell {
    Cell::new(aqi).set_alignment(CellAlignment::Right)
}

fn paint(text: &str, level: SeverityLevel) -> ColoredString {
    let (r, g, b) = level.rgb();
    text.truecolor(r, g, b)
}

/// Current AQI headline, gauge and health advice.
pub fn current_summary(reading: &CurrentReading, advice: &HealthRecommendation) -> String {
    let percent = gauge_percent(reading.aqi);
    let filled = ((percent / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let gauge = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH.saturating_sub(filled))
    );

    let mut advice_table = new_table(vec!["Health advice", ""]);
    advice_table
        .add_row(vec!["General", advice.general_advice])
        .add_row(vec!["Sensitive groups", advice.sensitive_groups])
        .add_row(vec!["Outdoor activities", advice.outdoor_activities])
        .add_row(vec!["Indoor", advice.indoor_advice]);

    format!(
        "{}\n{} {}  {}\n{} {:.0}%\nMain pollutant: {}\nUpdated: {}\n{}",
        reading.location.name.cyan().bold(),
        "AQI".bold(),
        paint(&reading.aqi.to_string(), reading.level).bold(),
        paint(reading.level.label(), reading.level),
        paint(&gauge, reading.level),
        percent,
        reading.main_pollutant,
        reading.timestamp.format("%Y-%m-%d %H:%M UTC"),
        advice_table
    )
}

pub fn forecast_table(forecast: &[ForecastDay]) -> Table {
    let mut table = new_table(vec!["Date", "Day", "AQI", "Level"]);
    for day in forecast {
        table.add_row(vec![
            Cell::new(day.date.format("%Y-%m-%d")),
            Cell::new(day.date.format("%a")),
            aqi_cell(day.aqi),
            level_cell(day.level),
        ]);
    }
    table
}

pub fn history_table(history: &[HistoricalPoint]) -> Table {
    let mut table = new_table(vec!["Date", "AQI", "Level"]);
    for point in history {
        table.add_row(vec![
            Cell::new(point.timestamp.format("%Y-%m-%d")),
            aqi_cell(point.aqi),
            level_cell(point.level),
        ]);
    }
    table
}

/// The most recent `CHART_DAYS` points and the vertical scale to draw them on.
pub fn chart_window(history: &[HistoricalPoint]) -> (&[HistoricalPoint], u32) {
    let start = history.len().saturating_sub(CHART_DAYS);
    let window = &history[start..];
    let scale = window
        .iter()
        .map(|point| point.aqi)
        .max()
        .unwrap_or(0)
        .max(CHART_MIN_SCALE);
    (window, scale)
}

/// Bar length for `aqi` on a chart scaled to `scale`.
pub fn bar_width(aqi: u32, scale: u32) -> usize {
    if scale == 0 {
        return 0;
    }
    let ratio = f64::from(aqi.min(scale)) / f64::from(scale);
    (ratio * CHART_WIDTH as f64).round() as usize
}

/// Horizontal bar chart of the recent trend, one line per day.
pub fn trend_chart(history: &[HistoricalPoint]) -> String {
    let (window, scale) = chart_window(history);
    let mut lines = vec![format!("AQI trend, last {} days (scale 0-{})", window.len(), scale)
        .bold()
        .to_string()];
    for point in window {
        let bar = "█".repeat(bar_width(point.aqi, scale));
        lines.push(format!(
            "{} │ {} {}",
            point.timestamp.format("%d/%m"),
            paint(&bar, point.level),
            point.aqi
        ));
    }
    lines.join("\n")
}

pub fn weather_table(weather: &WeatherReading) -> Table {
    let mut table = new_table(vec!["Weather", "Value"]);
    table
        .add_row(vec!["Temperature".to_string(), format!("{} °C", weather.temperature)])
        .add_row(vec!["Humidity".to_string(), format!("{} %", weather.humidity)])
        .add_row(vec![
            "Wind".to_string(),
            format!("{} km/h {}", weather.wind_speed, weather.wind_direction),
        ])
        .add_row(vec![
            "Precipitation".to_string(),
            format!("{:.1} mm", weather.precipitation),
        ]);
    table
}

pub fn prediction_table(prediction: &PredictionOutput) -> Table {
    let p = &prediction.pollutants;
    let mut table = new_table(vec!["Parameter", "Value"]);
    table
        .add_row(vec!["PM10".to_string(), format!("{:.1} µg/m³", p.pm10)])
        .add_row(vec!["CO".to_string(), format!("{:.2} mg/m³", p.co)])
        .add_row(vec!["NO2".to_string(), format!("{:.1} µg/m³", p.no2)])
        .add_row(vec!["SO2".to_string(), format!("{:.1} µg/m³", p.so2)])
        .add_row(vec!["O3".to_string(), format!("{:.1} µg/m³", p.o3)])
        .add_row(vec![
            "Temperature".to_string(),
            format!("{} °C", prediction.temperature),
        ])
        .add_row(vec!["Humidity".to_string(), format!("{} %", prediction.humidity)])
        .add_row(vec![
            "Wind speed".to_string(),
            format!("{} km/h", prediction.wind_speed),
        ]);
    let level = prediction.level();
    table.add_row(vec![
        Cell::new("Predicted AQI"),
        Cell::new(format!("{} ({})", prediction.predicted_aqi, level.label()))
            .fg(level_color(level)),
    ]);
    table
}

pub fn locations_table(locations: &[Location]) -> Table {
    let mut table = new_table(vec!["Location", "Latitude", "Longitude"]);
    for location in locations {
        table.add_row(vec![
            Cell::new(&location.name),
            Cell::new(format!("{:.4}", location.coordinates.latitude)),
            Cell::new(format!("{:.4}", location.coordinates.longitude)),
        ]);
    }
    table
}

pub fn levels_table(recommendations: &[&HealthRecommendation]) -> Table {
    let mut table = new_table(vec!["Level", "AQI", "Colour", "General advice"]);
    for rec in recommendations {
        let (low, high) = rec.level.range();
        let range = if rec.level == SeverityLevel::Hazardous {
            format!("{}+", low)
        } else {
            format!("{}-{}", low, high)
        };
        table.add_row(vec![
            level_cell(rec.level),
            Cell::new(range),
            Cell::new(rec.level.color_hex()),
            Cell::new(rec.general_advice),
        ]);
    }
    table
}
