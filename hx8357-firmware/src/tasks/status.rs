//! Status screen refresh task
//!
//! Owns the panel after bring-up and redraws the status screen once per
//! second.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use crate::display::{Panel, StatusScreen};

/// Refresh interval in milliseconds
pub const REFRESH_INTERVAL_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn status_task(mut panel: Panel, screen: StatusScreen) {
    info!("Status task started");

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_INTERVAL_MS));
    let start = Instant::now();

    loop {
        let uptime_s = start.elapsed().as_secs() as u32;

        let result = screen.draw(&mut panel, uptime_s).and_then(|_| panel.flush());
        if let Err(e) = result {
            warn!("Status redraw failed: {:?}", Debug2Format(&e));
        } else {
            trace!("Status redrawn at {} s", uptime_s);
        }

        ticker.next().await;
    }
}
