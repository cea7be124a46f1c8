//! HX8357 - 3.5" TFT demo firmware
//!
//! Brings up an HX8357B panel over SPI0 on an RP2040 board and keeps a
//! status screen refreshed.
//!
//! Pin assignment and panel options come from `display.toml`, embedded at
//! build time. SCK (GPIO18) and MOSI (GPIO19) are fixed by the board.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use hx8357_hal_rp2040::PinBank;

mod config;
mod display;
mod tasks;

use crate::config::load_config;
use crate::display::{build_panel, init_panel, StatusScreen};

/// Embedded board configuration
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

const TITLE: &[u8] = b"HX8357B 3.5\" TFT";

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("HX8357 firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut bank, board) = PinBank::from_peripherals(p);
    info!("Peripherals initialized");

    let config = load_config(EMBEDDED_CONFIG);

    let mut panel = unwrap!(build_panel(&config, &mut bank, board));
    match init_panel(&mut panel) {
        Ok(()) => info!("Panel initialized"),
        Err(e) => error!("Panel init failed: {:?}", Debug2Format(&e)),
    }

    let screen = StatusScreen::new(TITLE, config.panel.orientation);
    spawner.spawn(tasks::status_task(panel, screen)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
