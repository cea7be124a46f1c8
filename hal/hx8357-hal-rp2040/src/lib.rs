//! RP2040 board support for HX8357 panels
//!
//! Glue between `embassy-rp` and the driver stack:
//!
//! - Pin bank that hands out GPIOs by number from the config
//! - GPIO claim tracking for config validation
//! - Polarity-aware output pins for reset, backlight and chip select
//! - SPI0 configuration from [`hx8357_core::config::SpiSettings`]

#![no_std]

pub mod gpio;
pub mod pins;
pub mod spi;

pub use gpio::{parse_pin_string, GpioAllocator, RpOutput};
pub use pins::{BoardPeripherals, PinBank, PinError};
pub use spi::{spi_config, MOSI_PIN, SCK_PIN};
