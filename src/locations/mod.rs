//! The static catalog of locations the dashboard can report on, with
//! case-insensitive search and name resolution.

mod directory;

pub use directory::*;
