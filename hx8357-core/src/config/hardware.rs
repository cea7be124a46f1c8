//! Hardware configuration types
//!
//! SPI clocking and the GPIO lines the driver toggles itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// SPI clocking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiSettings {
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// SPI mode 0-3
    pub mode: u8,
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self {
            frequency_hz: 10_000_000,
            mode: 3,
        }
    }
}

/// Control lines
///
/// SCK and MOSI belong to the SPI peripheral and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// Chip select, active-low on the panel
    pub cs: PinConfig,
    /// Controller reset, active-low on the panel
    pub reset: PinConfig,
    /// Backlight enable
    pub backlight: PinConfig,
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self {
            cs: PinConfig::new(17),
            reset: PinConfig::new(20),
            backlight: PinConfig::new(21),
        }
    }
}

impl DisplayPins {
    pub fn iter(&self) -> impl Iterator<Item = &PinConfig> {
        [&self.cs, &self.reset, &self.backlight].into_iter()
    }
}
