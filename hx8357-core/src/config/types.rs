//! Configuration type definitions

use hx8357_protocol::WordOrder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{DisplayPins, SpiSettings};
use crate::state::Orientation;

/// Highest SPI clock the controller accepts on its serial interface
pub const MAX_SPI_FREQUENCY_HZ: u32 = 20_000_000;

/// Panel behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    pub orientation: Orientation,
    /// Send the complement of every color
    pub color_inversion: bool,
    /// Byte order of packed words on the bus
    pub word_order: WordOrder,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            color_inversion: true,
            word_order: WordOrder::BigEndian,
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub panel: PanelConfig,
    pub spi: SpiSettings,
    pub pins: DisplayPins,
}

/// Configuration consistency errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The same GPIO is assigned twice
    DuplicatePin(u8),
    /// SPI mode outside 0-3
    InvalidSpiMode(u8),
    /// Zero or above the controller limit
    InvalidFrequency(u32),
}

impl DisplayConfig {
    /// Check values the parser cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spi.mode > 3 {
            return Err(ConfigError::InvalidSpiMode(self.spi.mode));
        }
        if self.spi.frequency_hz == 0 || self.spi.frequency_hz > MAX_SPI_FREQUENCY_HZ {
            return Err(ConfigError::InvalidFrequency(self.spi.frequency_hz));
        }

        let pins = [self.pins.cs.pin, self.pins.reset.pin, self.pins.backlight.pin];
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].contains(a) {
                return Err(ConfigError::DuplicatePin(*a));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinConfig;

    #[test]
    fn test_defaults_match_reference_panel() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.panel.orientation, Orientation::Landscape);
        assert!(cfg.panel.color_inversion);
        assert_eq!(cfg.panel.word_order, WordOrder::BigEndian);
        assert_eq!(cfg.spi.frequency_hz, 10_000_000);
        assert_eq!(cfg.spi.mode, 3);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut cfg = DisplayConfig::default();
        cfg.pins.backlight = PinConfig::inverted(cfg.pins.cs.pin);
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicatePin(17)));
    }

    #[test]
    fn test_spi_limits() {
        let mut cfg = DisplayConfig::default();
        cfg.spi.mode = 4;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSpiMode(4)));

        let mut cfg = DisplayConfig::default();
        cfg.spi.frequency_hz = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFrequency(0)));

        cfg.spi.frequency_hz = 40_000_000;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFrequency(40_000_000)));
    }
}
