//! HX8357 Hardware Abstraction Layer
//!
//! This crate defines the small hardware surface the display driver needs
//! from its board: a byte-oriented SPI transmitter, a couple of output pins
//! and a millisecond delay. Chip-specific crates implement these traits, or
//! wrap any `embedded-hal` 1.0 implementation through the adapters in
//! [`embedded`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hx8357-drivers (HX8357B driver)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hx8357-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hx8357-hal-   │       │ embedded-hal  │
//! │    rp2040     │       │ (spidev, ...) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Reset and backlight lines
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`delay::DelayMs`] - Blocking delays for the power-up sequence

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
#[cfg(feature = "embedded-hal")]
pub mod embedded;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use spi::{SpiBus, SpiConfig};
