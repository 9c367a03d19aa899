//! Configuration module for Quote-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: [`Config::default`] reproduces the
//! built-in constants.
//!
//! # Example
//!
//! ```no_run
//! use quote_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Scraping from: {}", config.scraper.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, ScraperConfig, SelectorConfig, DEFAULT_BASE_URL, DEFAULT_CSV_PATH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
