//! # tekvec
//!
//! Converts vector images, given as curves of lines and cubic Bezier
//! segments, into Tektronix 4010 vector-mode byte streams.
//!
//! ## Architecture
//!
//! tekvec is organized as a workspace with multiple crates:
//!
//! 1. **tekvec-core** - Geometry types, device constants, errors
//! 2. **tekvec-vector** - Flattening, fitting, and vector-mode encoding
//! 3. **tekvec-settings** - JSON/TOML configuration
//! 4. **tekvec** - Command-line binary that reads curves and writes bytes

use anyhow::Context;
use std::path::Path;

pub use tekvec_core::{Curve, Point, Segment, TekError, TekResult};
pub use tekvec_settings::Config;
pub use tekvec_vector::{convert, Conversion, ConversionParameters, TekConverter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout free for the byte stream
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Read a JSON curve document: an array of curves, each an array of
/// segment objects tagged by `kind`.
pub fn read_curves(path: &Path) -> anyhow::Result<Vec<Curve>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read curve file: {}", path.display()))?;
    let curves = serde_json::from_str(&content)
        .with_context(|| format!("Invalid curve document: {}", path.display()))?;
    Ok(curves)
}

/// Load settings from `path`, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Convert the curve document at `input` using `config`.
pub fn convert_file(input: &Path, config: &Config) -> anyhow::Result<Conversion> {
    let curves = read_curves(input)?;
    let conversion = TekConverter::new(config.to_parameters())
        .convert(&curves)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    Ok(conversion)
}
