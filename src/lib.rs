pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::CleanerEngine, pipeline::RecordCleaner};
pub use utils::error::{CleanError, Result};
