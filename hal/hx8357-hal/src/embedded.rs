//! Adapters from `embedded-hal` 1.0
//!
//! Lets any `embedded-hal` SPI device and delay drive the panel: an
//! `embassy-rp` SPI behind an `embedded-hal-bus` `ExclusiveDevice`, a Linux
//! `SpidevDevice` and so on.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

use crate::{DelayMs, SpiBus};

/// [`SpiBus`] over an `embedded-hal` SPI device
///
/// The device owns chip select, so each driver flush is one CS-framed
/// transaction.
pub struct EhSpi<D> {
    device: D,
}

impl<D: SpiDevice<u8>> EhSpi<D> {
    /// Wrap an SPI device
    pub fn new(device: D) -> Self {
        Self { device }
    }
}

impl<D: SpiDevice<u8>> SpiBus for EhSpi<D> {
    type Error = D::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.device.write(data)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.device.transfer(read, write)
    }
}

/// [`DelayMs`] over an `embedded-hal` delay
pub struct EhDelay<D> {
    delay: D,
}

impl<D: DelayNs> EhDelay<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> DelayMs for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
