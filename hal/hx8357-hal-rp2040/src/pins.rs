//! Pin bank for config-driven pin assignment
//!
//! GPIO numbers for chip select, reset and backlight come from
//! `display.toml`, so pins are handed out by number at runtime. SCK and MOSI
//! are wired to SPI0 and never enter the bank.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_18, PIN_19, SPI0};
use embassy_rp::{Peri, Peripherals};

use crate::spi::{MOSI_PIN, SCK_PIN};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin belongs to the SPI bus
    Reserved,
}

/// Returns true for pins the board wires to SPI0
pub const fn is_reserved(pin: u8) -> bool {
    pin == SCK_PIN || pin == MOSI_PIN
}

/// Peripherals kept out of the bank
pub struct BoardPeripherals {
    pub spi0: Peri<'static, SPI0>,
    pub sck: Peri<'static, PIN_18>,
    pub mosi: Peri<'static, PIN_19>,
}

/// All free GPIOs, taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Split the peripherals into the bank and the SPI wiring
    pub fn from_peripherals(p: Peripherals) -> (Self, BoardPeripherals) {
        let pins = [
            Some(p.PIN_0.into()),
            Some(p.PIN_1.into()),
            Some(p.PIN_2.into()),
            Some(p.PIN_3.into()),
            Some(p.PIN_4.into()),
            Some(p.PIN_5.into()),
            Some(p.PIN_6.into()),
            Some(p.PIN_7.into()),
            Some(p.PIN_8.into()),
            Some(p.PIN_9.into()),
            Some(p.PIN_10.into()),
            Some(p.PIN_11.into()),
            Some(p.PIN_12.into()),
            Some(p.PIN_13.into()),
            Some(p.PIN_14.into()),
            Some(p.PIN_15.into()),
            Some(p.PIN_16.into()),
            Some(p.PIN_17.into()),
            None, // SCK
            None, // MOSI
            Some(p.PIN_20.into()),
            Some(p.PIN_21.into()),
            Some(p.PIN_22.into()),
            Some(p.PIN_23.into()),
            Some(p.PIN_24.into()),
            Some(p.PIN_25.into()),
            Some(p.PIN_26.into()),
            Some(p.PIN_27.into()),
            Some(p.PIN_28.into()),
            Some(p.PIN_29.into()),
        ];
        let board = BoardPeripherals {
            spi0: p.SPI0,
            sck: p.PIN_18,
            mosi: p.PIN_19,
        };
        (Self { pins }, board)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num as usize >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if is_reserved(pin_num) {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}
