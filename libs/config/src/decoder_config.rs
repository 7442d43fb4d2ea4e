//! Decoder Configuration Module
//!
//! Loads decoder settings from built-in defaults, an optional TOML file and
//! `DUKAS_`-prefixed environment variables, in that order of precedence.
//!
//! ```toml
//! emit_all_ticks = false
//!
//! [precision]
//! default_digits = 5
//! reduced_digits = 3
//! three_letter = ["IDX", "JPY", "CMD", "XAU", "XAG"]
//! two_letter = ["DE"]
//! ```
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `DUKAS_PRECISION__REDUCED_DIGITS=2`.

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File, FileFormat};
use dukas_types::PrecisionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DUKAS";

/// Settings shared by every file in one decoder run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Emit every record instead of only quote changes
    pub emit_all_ticks: bool,

    /// Digit tables used to pick each symbol's pip precision
    pub precision: PrecisionPolicy,
}

impl DecoderConfig {
    /// Load configuration with environment overrides
    ///
    /// A `path` that is given must exist and parse as TOML. Digit counts
    /// outside `0..=9` are rejected here rather than at decode time.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading decoder config: {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config = builder
            .add_source(env)
            .build()
            .context("Failed to build configuration")?;

        let decoder: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        debug!(
            emit_all_ticks = decoder.emit_all_ticks,
            default_digits = decoder.precision.default_digits.digits(),
            reduced_digits = decoder.precision.reduced_digits.digits(),
            "Decoder configuration resolved"
        );
        Ok(decoder)
    }
}
