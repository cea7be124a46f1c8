//! Status screen
//!
//! ```text
//! ┌──────────────────────────────┐
//! │         HX8357B demo         │  title, centered
//! │ 480x320 landscape            │
//! │ Uptime      123 s            │
//! │ ┌──────────────────────────┐ │
//! │ │            (●)           │ │  heartbeat circle
//! │ └──────────────────────────┘ │
//! │ → ● ■ ★ 25℃                  │  double-byte symbols
//! └──────────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;

use hx8357_core::state::Orientation;
use hx8357_core::{Gram, GramExt, Point, Rgb565, TextExt, TextStyle};
use hx8357_display::FONTS;

const MARGIN: u16 = 8;
const BOX_TOP: u16 = 100;
const BOX_HEIGHT: u16 = 80;
const HEART_RADIUS: u16 = 30;

/// GB2312: → ● ■ ★, then "25℃"
const SYMBOL_LINE: &[u8] = b"\xA1\xFA\xA1\xF1\xA1\xF6\xA1\xEF 25\xA1\xE6";

/// Static layout plus a seconds counter
pub struct StatusScreen {
    title: &'static [u8],
    orientation: Orientation,
}

impl StatusScreen {
    pub const fn new(title: &'static [u8], orientation: Orientation) -> Self {
        Self { title, orientation }
    }

    /// Draw every element; the caller flushes
    pub fn draw<G: Gram>(&self, gram: &mut G, uptime_s: u32) -> Result<(), G::Error> {
        let (width, height) = gram.size();
        let title = TextStyle::new(16, Rgb565::BLUE, Rgb565::WHITE);
        let body = TextStyle::new(16, Rgb565::BLACK, Rgb565::WHITE);
        let small = TextStyle::new(12, Rgb565::GRAY, Rgb565::WHITE);

        gram.show_str_centered(&FONTS, 0, MARGIN, self.title, &title)?;

        let mut line: String<32> = String::new();
        let name = match self.orientation {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        };
        // At most 17 bytes
        let _ = write!(line, "{}x{} {}", width, height, name);
        gram.show_string(&FONTS, MARGIN, 40, line.as_str(), &small)?;

        gram.show_string(&FONTS, MARGIN, 64, "Uptime", &body)?;
        gram.show_number(&FONTS, MARGIN + 12 * body.advance(), 64, uptime_s, 6, &body)?;
        gram.show_string(&FONTS, MARGIN + 19 * body.advance(), 64, "s", &body)?;

        let left = MARGIN as i32;
        let right = width.saturating_sub(MARGIN + 1) as i32;
        let top = BOX_TOP as i32;
        let bottom = (BOX_TOP + BOX_HEIGHT) as i32;
        gram.draw_rectangle(Point::new(left, top), Point::new(right, bottom), Rgb565::BLACK)?;

        let center = Point::new(width as i32 / 2, top + BOX_HEIGHT as i32 / 2);
        let beat = if uptime_s % 2 == 0 {
            Rgb565::RED
        } else {
            Rgb565::LIGHTBLUE
        };
        gram.draw_circle(center, HEART_RADIUS, beat, true)?;
        gram.draw_circle(center, HEART_RADIUS, Rgb565::BLACK, false)?;

        let symbols = TextStyle::new(24, Rgb565::DARKBLUE, Rgb565::WHITE);
        gram.show_str(&FONTS, MARGIN, bottom as u16 + 16, SYMBOL_LINE, &symbols)?;

        Ok(())
    }
}
