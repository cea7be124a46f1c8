//! Configuration types
//!
//! Board-agnostic description of one panel: orientation and wire format,
//! SPI clocking, and the control pins. The firmware fills these from its
//! embedded TOML file.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
