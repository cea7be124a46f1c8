//! Configuration loading and parsing
//!
//! The board configuration is `display.toml`, embedded at build time and
//! parsed by a small no_std parser.

pub mod loader;
pub mod toml;

pub use loader::load_config;
pub use toml::{parse_config, ParseError};
