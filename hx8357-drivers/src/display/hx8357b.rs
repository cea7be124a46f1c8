//! HX8357B TFT controller (3-wire serial)
//!
//! The HX8357B is a 320×480 RGB565 controller. In 3-wire serial mode each
//! transfer unit is 9 bits: a D/C flag and one byte. This driver frames
//! commands and parameters as codewords, packs them 16 at a time into nine
//! 16-bit words, and hands full 1024-codeword batches to the SPI bus.
//!
//! # Write path
//!
//! ```text
//! set_window ─▶ CASET/PASET + ranges ─▶ RAMWR ─▶ pixels (hi, lo) ...
//!                        │                          │
//!                        └──── PackBuffer ◀─────────┘
//!                                  │ 1024 codewords / flush()
//!                                  ▼
//!                            SpiBus::write
//! ```
//!
//! Nothing reaches the panel until a batch fills up or [`Hx8357b::flush`] is
//! called. Delays in the power-up sequence flush first so that the timing
//! applies to commands that have actually been sent.

use hx8357_core::color::Rgb565;
use hx8357_core::config::PanelConfig;
use hx8357_core::geometry::Window;
use hx8357_core::state::{DeviceState, Orientation, WindowEvent, WindowState};
use hx8357_core::traits::{Gram, GramExt};
use hx8357_hal::{DelayMs, OutputPin, SpiBus};
use hx8357_protocol::{Codeword, PackBuffer};

use super::init::{InitStep, HX8357B_INIT};

/// HX8357B register addresses
pub mod reg {
    pub use hx8357_core::state::{COLUMN_ADDRESS_SET, MEMORY_WRITE, PAGE_ADDRESS_SET};

    /// No operation
    pub const NOP: u8 = 0x00;
    /// Exit sleep mode
    pub const SLEEP_OUT: u8 = 0x11;
    /// Display inversion on
    pub const INVERSION_ON: u8 = 0x21;
    /// Display off
    pub const DISPLAY_OFF: u8 = 0x28;
    /// Display on
    pub const DISPLAY_ON: u8 = 0x29;
    /// Memory access control (MADCTL)
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    /// Interface pixel format
    pub const PIXEL_FORMAT: u8 = 0x3A;
    /// Display mode
    pub const SET_DISPLAY_MODE: u8 = 0xB4;
    /// Panel driving
    pub const SET_PANEL_DRIVING: u8 = 0xC0;
    /// Display timing, normal mode
    pub const SET_DISPLAY_TIMING: u8 = 0xC1;
    /// Frame rate and inversion control
    pub const SET_FRAME_RATE: u8 = 0xC5;
    /// Gamma curve
    pub const SET_GAMMA: u8 = 0xC8;
    /// Power
    pub const SET_POWER: u8 = 0xD0;
    /// VCOM
    pub const SET_VCOM: u8 = 0xD1;
    /// Power, normal mode
    pub const SET_POWER_NORMAL: u8 = 0xD2;
    /// Power, partial mode
    pub const SET_POWER_PARTIAL: u8 = 0xD3;
    /// Power, idle mode
    pub const SET_POWER_IDLE: u8 = 0xD4;
    /// Panel related
    pub const SET_PANEL_RELATED: u8 = 0xE9;
    /// Source/gate direction timing
    pub const SET_DIR_TIMING: u8 = 0xED;
    /// Equalize
    pub const SET_EQ: u8 = 0xEE;
}

/// Reset pulse width
const RESET_PULSE_MS: u32 = 10;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The SPI bus failed; pending codewords were dropped
    Transport(E),
    /// Pixel data without a programmed and armed window
    WindowNotArmed,
}

/// HX8357B driver
///
/// Owns the bus, the reset and backlight lines, the pack buffer and the
/// addressing state. Every operation takes `&mut self`; share it behind a
/// single mutex if more than one task draws.
pub struct Hx8357b<SPI, RST, BL> {
    spi: SPI,
    reset: RST,
    backlight: BL,
    pack: PackBuffer,
    device: DeviceState,
    window: WindowState,
    invert_colors: bool,
}

impl<SPI, RST, BL> Hx8357b<SPI, RST, BL>
where
    SPI: SpiBus,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a driver; no bus traffic until [`init`](Self::init)
    pub fn new(spi: SPI, reset: RST, backlight: BL, config: &PanelConfig) -> Self {
        Self {
            spi,
            reset,
            backlight,
            pack: PackBuffer::new(config.word_order),
            device: DeviceState::for_orientation(config.orientation),
            window: WindowState::Idle,
            invert_colors: config.color_inversion,
        }
    }

    /// Reset and configure the controller, switch the backlight on and
    /// clear to white
    pub fn init<D: DelayMs>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("HX8357B: init ({})", self.device.orientation);

        self.pack.clear();
        self.window = WindowState::Idle;

        self.reset.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        self.reset.set_high();

        for step in HX8357B_INIT {
            match *step {
                InitStep::Command(cmd, params) => self.write_command(cmd, params)?,
                InitStep::DelayMs(ms) => {
                    self.flush()?;
                    delay.delay_ms(ms);
                }
            }
        }

        self.set_orientation(self.device.orientation)?;
        self.backlight.set_high();
        self.clear(Rgb565::WHITE)?;
        self.flush()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HX8357B: ready {}x{}", self.device.width, self.device.height);

        Ok(())
    }

    /// Queue a command byte (D/C = 0)
    pub fn write_register(&mut self, cmd: u8) -> Result<(), Error<SPI::Error>> {
        self.push(Codeword::command(cmd))?;
        let event = if cmd == self.device.ram_write_cmd {
            WindowEvent::RamWriteArmed
        } else {
            WindowEvent::CommandIssued
        };
        self.window = self.window.transition(event);
        Ok(())
    }

    /// Queue a parameter byte (D/C = 1)
    pub fn write_data8(&mut self, data: u8) -> Result<(), Error<SPI::Error>> {
        self.push(Codeword::data(data))
    }

    /// Queue a 16-bit parameter, high byte first
    pub fn write_data16(&mut self, data: u16) -> Result<(), Error<SPI::Error>> {
        self.write_data8((data >> 8) as u8)?;
        self.write_data8(data as u8)
    }

    /// Queue a command followed by its parameters
    pub fn write_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Error<SPI::Error>> {
        self.write_register(cmd)?;
        for &p in params {
            self.write_data8(p)?;
        }
        Ok(())
    }

    /// Write the column and page ranges of `window`
    ///
    /// Does not issue the memory write; see [`arm_ram_write`](Self::arm_ram_write).
    pub fn program_window(&mut self, window: Window) -> Result<(), Error<SPI::Error>> {
        for cmd in [self.device.set_x_cmd, self.device.set_y_cmd] {
            let (start, end) = self.device.range_for(cmd, &window);
            self.write_register(cmd)?;
            self.write_data16(start)?;
            self.write_data16(end)?;
        }
        self.window = self.window.transition(WindowEvent::WindowSet(window));
        Ok(())
    }

    /// Issue the memory-write command for the programmed window
    pub fn arm_ram_write(&mut self) -> Result<(), Error<SPI::Error>> {
        self.write_register(self.device.ram_write_cmd)
    }

    /// Switch orientation; the window must be set again afterwards
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<SPI::Error>> {
        self.device = DeviceState::for_orientation(orientation);
        self.write_command(reg::MEMORY_ACCESS_CONTROL, &[self.device.memory_access])?;
        self.window = WindowState::Idle;
        Ok(())
    }

    pub fn display_on(&mut self) -> Result<(), Error<SPI::Error>> {
        self.write_register(reg::DISPLAY_ON)
    }

    pub fn display_off(&mut self) -> Result<(), Error<SPI::Error>> {
        self.write_register(reg::DISPLAY_OFF)
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set_state(on);
    }

    /// Send everything queued
    ///
    /// A partial batch is padded with NOP commands to a word boundary. The
    /// NOP ends any memory write, so the window has to be set again before
    /// more pixels.
    pub fn flush(&mut self) -> Result<(), Error<SPI::Error>> {
        if self.pack.is_empty() {
            return Ok(());
        }

        let padded = self.pack.pad_to_word_boundary();
        if padded > 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("HX8357B: flush padded with {} NOP", padded);
            self.window = self.window.transition(WindowEvent::Padded);
        }

        self.send_batch()
    }

    /// Flush and give back the bus and pins
    ///
    /// A transport failure during the final flush is logged and the parts
    /// are returned anyway.
    pub fn release(mut self) -> (SPI, RST, BL) {
        if let Err(_e) = self.flush() {
            #[cfg(feature = "defmt")]
            defmt::warn!("HX8357B: final flush failed");
        }
        (self.spi, self.reset, self.backlight)
    }

    pub fn device(&self) -> &DeviceState {
        &self.device
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    /// Codewords queued since the last transfer
    pub fn pending(&self) -> usize {
        self.pack.len()
    }

    fn push(&mut self, codeword: Codeword) -> Result<(), Error<SPI::Error>> {
        if self.pack.push(codeword) {
            self.send_batch()?;
        }
        Ok(())
    }

    fn send_batch(&mut self) -> Result<(), Error<SPI::Error>> {
        let spi = &mut self.spi;
        match self.pack.flush_with(|bytes| spi.write(bytes)) {
            Ok(()) => Ok(()),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("HX8357B: SPI write failed, batch dropped");
                self.window = self.window.transition(WindowEvent::TransportFailed);
                Err(Error::Transport(e))
            }
        }
    }
}

impl<SPI, RST, BL> Gram for Hx8357b<SPI, RST, BL>
where
    SPI: SpiBus,
    RST: OutputPin,
    BL: OutputPin,
{
    type Error = Error<SPI::Error>;

    fn size(&self) -> (u16, u16) {
        (self.device.width, self.device.height)
    }

    fn set_window(&mut self, window: Window) -> Result<(), Self::Error> {
        self.program_window(window)?;
        self.arm_ram_write()
    }

    fn write_pixel(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        if !self.window.is_streaming() {
            return Err(Error::WindowNotArmed);
        }
        let color = if self.invert_colors {
            color.inverted()
        } else {
            color
        };
        self.write_data16(color.raw())?;
        self.window = self.window.transition(WindowEvent::PixelWritten);
        Ok(())
    }
}
