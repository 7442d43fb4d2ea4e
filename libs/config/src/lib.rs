//! # Dukas Decoder Configuration
//!
//! Layered settings for the tick decoder: built-in defaults, an optional
//! TOML file, then `DUKAS_` environment variables.
//!
//! ## Usage
//!
//! ```rust
//! use dukas_config::DecoderConfig;
//!
//! let config = DecoderConfig::default();
//! assert!(!config.emit_all_ticks);
//! assert_eq!(config.precision.precision_for("USDJPY").digits(), 3);
//! ```

pub mod decoder_config;

pub use decoder_config::{DecoderConfig, ENV_PREFIX};
