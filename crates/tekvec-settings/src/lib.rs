//! tekvec Settings Crate
//!
//! Loads, validates, and saves conversion settings, and turns them into
//! pipeline parameters.

pub mod config;
pub mod error;

pub use config::{Config, EncodeSettings, FitSettings, FlattenSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
