//! Embedded configuration
//!
//! Parses and validates the TOML compiled into the firmware. A broken file
//! falls back to the board defaults so the panel still comes up.

use defmt::*;

use hx8357_core::config::{ConfigError, DisplayConfig};
use hx8357_hal_rp2040::{GpioAllocator, PinError};

use super::toml::{parse_config, ParseError};

/// Why the embedded configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// TOML syntax or value error
    Parse(ParseError),
    /// Inconsistent values
    Invalid(ConfigError),
    /// Pin not usable on this board
    Pin(PinError),
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

impl From<PinError> for LoadError {
    fn from(e: PinError) -> Self {
        LoadError::Pin(e)
    }
}

/// Parse and check a configuration against the board
pub fn try_load(text: &str) -> Result<DisplayConfig, LoadError> {
    let config = parse_config(text)?;
    config.validate()?;
    GpioAllocator::new().allocate_display(&config.pins)?;
    Ok(config)
}

/// Load the embedded configuration, or the defaults if it is unusable
pub fn load_config(text: &str) -> DisplayConfig {
    match try_load(text) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Embedded display config rejected: {:?}", Debug2Format(&e));
            warn!("Using default display configuration");
            DisplayConfig::default()
        }
    }
}

fn log_config_summary(config: &DisplayConfig) {
    info!("Display configuration loaded");
    debug!(
        "  {}, inversion={}",
        Debug2Format(&config.panel.orientation),
        config.panel.color_inversion
    );
    debug!(
        "  SPI {} Hz, mode {}",
        config.spi.frequency_hz, config.spi.mode
    );
    debug!(
        "  cs={} reset={} backlight={}",
        config.pins.cs.pin, config.pins.reset.pin, config.pins.backlight.pin
    );
}
