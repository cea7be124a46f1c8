//! Panel bring-up
//!
//! SPI0 runs blocking and transmit-only; chip select is a plain GPIO driven
//! by `embedded-hal-bus` around every driver flush.

pub mod status;

use defmt::*;
use embassy_rp::spi::{Blocking, Spi};
use embassy_rp::peripherals::SPI0;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};

use hx8357_core::config::DisplayConfig;
use hx8357_drivers::{Error, Hx8357b};
use hx8357_hal::embedded::{EhDelay, EhSpi};
use hx8357_hal_rp2040::{spi_config, BoardPeripherals, PinBank, PinError, RpOutput};

pub use status::StatusScreen;

/// SPI device with chip select
pub type PanelSpi = EhSpi<ExclusiveDevice<Spi<'static, SPI0, Blocking>, RpOutput, NoDelay>>;

/// The driver as wired on this board
pub type Panel = Hx8357b<PanelSpi, RpOutput, RpOutput>;

/// Driver error on this board
pub type PanelError = Error<<PanelSpi as hx8357_hal::SpiBus>::Error>;

/// Claim the control pins and build the (uninitialized) driver
pub fn build_panel(
    config: &DisplayConfig,
    bank: &mut PinBank,
    board: BoardPeripherals,
) -> Result<Panel, PinError> {
    let cs = RpOutput::new(bank.take(config.pins.cs.pin)?, config.pins.cs, true);
    let reset = RpOutput::new(bank.take(config.pins.reset.pin)?, config.pins.reset, true);
    let backlight = RpOutput::new(
        bank.take(config.pins.backlight.pin)?,
        config.pins.backlight,
        false,
    );

    // Values were validated when the config was loaded
    let spi_cfg = spi_config(&config.spi).unwrap_or_default();
    let spi = Spi::new_blocking_txonly(board.spi0, board.sck, board.mosi, spi_cfg);
    let device = unwrap!(ExclusiveDevice::new_no_delay(spi, cs));

    info!(
        "SPI0 at {} Hz, cs=gpio{} reset=gpio{} backlight=gpio{}",
        config.spi.frequency_hz,
        config.pins.cs.pin,
        config.pins.reset.pin,
        config.pins.backlight.pin
    );

    Ok(Hx8357b::new(
        EhSpi::new(device),
        reset,
        backlight,
        &config.panel,
    ))
}

/// Run the power-up sequence
pub fn init_panel(panel: &mut Panel) -> Result<(), PanelError> {
    let mut delay = EhDelay::new(embassy_time::Delay);
    panel.init(&mut delay)
}
