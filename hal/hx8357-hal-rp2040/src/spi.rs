//! SPI0 setup
//!
//! The panel's serial clock and data lines are routed to SPI0 on the board,
//! so only the clocking is configurable.

use embassy_rp::spi::{Config, Phase, Polarity};

use hx8357_core::config::{ConfigError, SpiSettings, MAX_SPI_FREQUENCY_HZ};
use hx8357_hal::spi::{self as hal_spi, Mode};
use hx8357_hal::SpiConfig;

/// SPI0 SCK
pub const SCK_PIN: u8 = 18;
/// SPI0 TX
pub const MOSI_PIN: u8 = 19;

/// Build an `embassy-rp` SPI configuration
pub fn spi_config(settings: &SpiSettings) -> Result<Config, ConfigError> {
    let mode = Mode::from_number(settings.mode).ok_or(ConfigError::InvalidSpiMode(settings.mode))?;
    if settings.frequency_hz == 0 || settings.frequency_hz > MAX_SPI_FREQUENCY_HZ {
        return Err(ConfigError::InvalidFrequency(settings.frequency_hz));
    }

    let bus = SpiConfig::from_mode(settings.frequency_hz, mode);
    let mut config = Config::default();
    config.frequency = bus.frequency;
    config.polarity = match bus.polarity {
        hal_spi::Polarity::IdleLow => Polarity::IdleLow,
        hal_spi::Polarity::IdleHigh => Polarity::IdleHigh,
    };
    config.phase = match bus.phase {
        hal_spi::Phase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
        hal_spi::Phase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
    };
    Ok(config)
}
