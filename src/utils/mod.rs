//! Utility modules

pub mod config;

pub use config::{ConfigError, RadioConfig};
