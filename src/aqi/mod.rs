//! AQI classification: severity levels, their display metadata and the
//! health recommendation attached to each level.

mod health;
mod levels;

pub use health::*;
pub use levels::*;
