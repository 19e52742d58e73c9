//! Provides the simulated environmental data source behind the dashboard.
//!
//! Includes:
//! - `simulated`: the provider generating current, forecast, historical, weather and prediction data.
//! - `profile`: regional and seasonal baselines.
//! - `prediction`: the pollutant-weighted AQI score.
//! - `noise` / `clock` / `latency`: injectable randomness, time and artificial delay.
//! - `dashboard`: the aggregate fetch used by the CLI.

mod clock;
mod dashboard;
mod latency;
mod noise;
mod prediction;
mod profile;
mod simulated;

pub use dashboard::fetch_dashboard;
pub use latency::LatencyProfile;
pub use noise::{NoiseSource, RandomNoise};
pub use simulated::{SimulatedProvider, DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};

#[cfg(test)]
pub use clock::FixedClock;
#[cfg(test)]
pub use noise::MidpointNoise;
