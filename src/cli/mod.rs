//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, dispatching them against the simulated provider,
//! interactive prompts for the menu loop, and terminal rendering.

mod commands;
mod prompts;
pub mod render;

pub use commands::*;
pub use prompts::*;
