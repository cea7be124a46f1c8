//! GPIO allocation and output lines
//!
//! [`GpioAllocator`] checks a pin assignment before any hardware is touched.
//! [`RpOutput`] applies a [`PinConfig`]'s polarity so the driver only ever
//! deals in logical levels.

use core::convert::Infallible;

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use heapless::FnvIndexSet;

use hx8357_core::config::{DisplayPins, PinConfig};
use hx8357_hal::OutputPin;

use crate::pins::{is_reserved, PinError, GPIO_COUNT};

/// Tracks claimed GPIOs
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim a GPIO
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if is_reserved(pin) {
            return Err(PinError::Reserved);
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken);
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::InvalidPin)?;
        Ok(())
    }

    /// Claim every control line of a display
    pub fn allocate_display(&mut self, pins: &DisplayPins) -> Result<(), PinError> {
        for pin in pins.iter() {
            self.allocate(pin.pin)?;
        }
        Ok(())
    }
}

/// Parse a pin string from config
///
/// - `"gpio17"` -> `(17, false)`
/// - `"!gpio20"` -> `(20, true)` (active-low)
pub fn parse_pin_string(s: &str) -> Option<(u8, bool)> {
    let s = s.trim();
    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
    if pin as usize >= GPIO_COUNT {
        return None;
    }
    Some((pin, inverted))
}

/// Push-pull output honoring [`PinConfig::inverted`]
pub struct RpOutput {
    pin: Output<'static>,
    inverted: bool,
}

impl RpOutput {
    /// Configure `pin` as an output starting at logical level `high`
    pub fn new(pin: Peri<'static, AnyPin>, config: PinConfig, high: bool) -> Self {
        let level = Level::from(high != config.inverted);
        Self {
            pin: Output::new(pin, level),
            inverted: config.inverted,
        }
    }

    fn drive(&mut self, high: bool) {
        self.pin.set_level(Level::from(high != self.inverted));
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.drive(true);
    }

    fn set_low(&mut self) {
        self.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }
}

// Chip select goes through embedded-hal-bus, which wants the embedded-hal trait.
impl embedded_hal::digital::ErrorType for RpOutput {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for RpOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}
