#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    entry::{EntryPoint, Outcome, Phase},
    greeting::{emit_greeting, GREETING},
};
pub use utils::error::{HelloError, Result};
