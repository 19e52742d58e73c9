//! Defines the data structures and models used throughout the application.
//!
//! This includes the locations the dashboard knows about, the readings produced
//! by the simulated provider, and the records used for CLI output.

mod air_quality;

pub use air_quality::*;
