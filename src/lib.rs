pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{env::EnvConfig, LookupConfig};
pub use core::{
    extract::PatternExtractor, lookup::LookupEngine, response::ApiResponse,
    upstream::HttpUpstream,
};
pub use utils::error::{LookupError, Result};
