pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::RustCastConnector;
pub use config::{CliConfig, Command, FileConfig, Settings};
pub use core::{CommandOutput, Controller};
pub use utils::error::{CastError, Result};
