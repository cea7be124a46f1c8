//! Text rendering
//!
//! Glyphs are blitted in one of two modes:
//!
//! - **Block**: the glyph cell becomes the address window and every pixel is
//!   streamed, foreground for set bits and background for clear ones.
//! - **Point**: only set bits are plotted, one 1×1 window each, leaving the
//!   background untouched.
//!
//! Strings are byte strings. Bytes in `' '..='~'` are ASCII glyphs that
//! advance by half the text size; a byte above 0x80 starts a double-byte
//! (GB2312) pair that advances by the full size; `\r` returns to the start
//! column one line down. Any other byte below 0x80 has no glyph: it draws
//! nothing but still advances like an ASCII character.
//!
//! Block-mode glyphs are drawn whole or not at all; a cell that would run
//! past the panel edge is skipped.

use crate::color::Rgb565;
use crate::font::{is_printable, FontSet, WideFont};
use crate::geometry::{Point, Window};
use crate::traits::{Gram, GramExt};

/// Glyph blit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlitMode {
    /// Opaque cell, foreground and background
    #[default]
    Block,
    /// Transparent, foreground only
    Point,
}

/// How text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Glyph height in pixels (12, 16, 24 or 32)
    pub size: u8,
    pub fg: Rgb565,
    pub bg: Rgb565,
    pub mode: BlitMode,
}

impl TextStyle {
    /// Opaque text
    pub const fn new(size: u8, fg: Rgb565, bg: Rgb565) -> Self {
        Self {
            size,
            fg,
            bg,
            mode: BlitMode::Block,
        }
    }

    /// Foreground-only text
    pub const fn transparent(size: u8, fg: Rgb565) -> Self {
        Self {
            size,
            fg,
            bg: Rgb565::BLACK,
            mode: BlitMode::Point,
        }
    }

    pub const fn with_mode(self, mode: BlitMode) -> Self {
        Self { mode, ..self }
    }

    pub const fn with_size(self, size: u8) -> Self {
        Self { size, ..self }
    }

    /// Horizontal advance of one ASCII glyph
    pub const fn advance(&self) -> u16 {
        self.size as u16 / 2
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16, Rgb565::BLUE, Rgb565::WHITE)
    }
}

/// Largest ASCII font; bigger text sizes fall back to it in mixed strings
const MAX_ASCII_SIZE: u8 = 16;

/// Text primitives for every [`Gram`]
pub trait TextExt: Gram {
    /// True when a `w`×`h` cell at (x, y) lies entirely on the panel
    fn fits(&self, x: u16, y: u16, w: u16, h: u16) -> bool {
        let (width, height) = self.size();
        x as u32 + w as u32 <= width as u32 && y as u32 + h as u32 <= height as u32
    }

    /// Draw one ASCII glyph with its top-left corner at (x, y)
    ///
    /// Unknown characters and sizes without a font draw nothing, and so does
    /// a block-mode cell that does not fit on the panel.
    fn show_char(
        &mut self,
        fonts: &FontSet<'_>,
        x: u16,
        y: u16,
        ch: u8,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let Some(font) = fonts.ascii(style.size) else {
            return Ok(());
        };
        let Some(rows) = font.glyph(ch) else {
            return Ok(());
        };

        match style.mode {
            BlitMode::Block => {
                if !self.fits(x, y, font.width as u16, font.height as u16) {
                    return Ok(());
                }
                let cell = Window::from_origin(x, y, font.width as u16, font.height as u16);
                self.set_window(cell)?;
                for &row in rows {
                    let mut bits = row;
                    for _ in 0..font.width {
                        let color = if bits & 0x01 != 0 { style.fg } else { style.bg };
                        self.write_pixel(color)?;
                        bits >>= 1;
                    }
                }
            }
            BlitMode::Point => {
                for (dy, &row) in rows.iter().enumerate() {
                    for dx in 0..font.width {
                        if (row >> dx) & 0x01 != 0 {
                            let p = Point::new(x as i32 + dx as i32, y as i32 + dy as i32);
                            self.draw_point(p, style.fg)?;
                        }
                    }
                }
            }
        }

        self.restore_full_window()
    }

    /// Draw the leading printable run of `text`
    ///
    /// Stops at the first non-printable character or at the first glyph that
    /// would not fit on the panel. Returns the cursor after the last glyph.
    fn show_string(
        &mut self,
        fonts: &FontSet<'_>,
        x: u16,
        y: u16,
        text: &str,
        style: &TextStyle,
    ) -> Result<(u16, u16), Self::Error> {
        let (width, height) = self.size();
        let mut x = x;

        for &ch in text.as_bytes().iter().take_while(|&&c| is_printable(c)) {
            if x > width.saturating_sub(style.advance())
                || y > height.saturating_sub(style.size as u16)
            {
                break;
            }
            self.show_char(fonts, x, y, ch, style)?;
            x = x.saturating_add(style.advance());
        }

        Ok((x, y))
    }

    /// Draw `num` as `len` decimal digits, leading zeros blanked
    ///
    /// The last digit is always drawn. Always opaque.
    fn show_number(
        &mut self,
        fonts: &FontSet<'_>,
        x: u16,
        y: u16,
        num: u32,
        len: u8,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let style = style.with_mode(BlitMode::Block);
        let mut leading = true;

        for t in 0..len {
            let place = 10u32.checked_pow((len - t - 1) as u32);
            let digit = place.map_or(0, |p| (num / p) % 10) as u8;
            let cx = x.saturating_add(style.advance() * t as u16);

            if leading && t < len - 1 && digit == 0 {
                self.show_char(fonts, cx, y, b' ', &style)?;
                continue;
            }
            leading = false;
            self.show_char(fonts, cx, y, b'0' + digit, &style)?;
        }

        Ok(())
    }

    /// Draw one double-byte glyph; unknown codes draw nothing
    ///
    /// Like [`TextExt::show_char`], a block-mode cell off the panel edge is
    /// skipped.
    fn draw_wide_glyph(
        &mut self,
        font: &WideFont,
        x: u16,
        y: u16,
        code: [u8; 2],
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let Some(glyph) = font.find(code) else {
            return Ok(());
        };
        let size = font.size as u16;
        let rows = glyph.mask.chunks(font.bytes_per_row()).take(size as usize);
        let bit = |row: &[u8], col: u16| {
            row.get(col as usize / 8)
                .map_or(false, |b| b & (0x80 >> (col % 8)) != 0)
        };

        match style.mode {
            BlitMode::Block => {
                if !self.fits(x, y, size, size) {
                    return Ok(());
                }
                self.set_window(Window::from_origin(x, y, size, size))?;
                for row in rows {
                    for col in 0..size {
                        let color = if bit(row, col) { style.fg } else { style.bg };
                        self.write_pixel(color)?;
                    }
                }
            }
            BlitMode::Point => {
                for (dy, row) in rows.enumerate() {
                    for col in 0..size {
                        if bit(row, col) {
                            let p = Point::new(x as i32 + col as i32, y as i32 + dy as i32);
                            self.draw_point(p, style.fg)?;
                        }
                    }
                }
            }
        }

        self.restore_full_window()
    }

    /// Draw a mixed ASCII / double-byte string
    ///
    /// Rendering ends at a NUL, at a lead byte with no second byte, or when
    /// the next glyph would not fit. Control bytes other than `\r` have no
    /// glyph and only advance the cursor. Returns the final cursor.
    fn show_str(
        &mut self,
        fonts: &FontSet<'_>,
        x: u16,
        y: u16,
        text: &[u8],
        style: &TextStyle,
    ) -> Result<(u16, u16), Self::Error> {
        let (width, height) = self.size();
        let size = style.size as u16;
        let line_start = x;
        let (mut x, mut y) = (x, y);
        let mut i = 0;

        while let Some(&b) = text.get(i) {
            if b == 0 {
                break;
            }

            if b > 0x80 {
                if x > width.saturating_sub(size) || y > height.saturating_sub(size) {
                    break;
                }
                let Some(&second) = text.get(i + 1) else {
                    break;
                };
                if let Some(font) = fonts.wide(style.size) {
                    self.draw_wide_glyph(font, x, y, [b, second], style)?;
                }
                x = x.saturating_add(size);
                i += 2;
                continue;
            }

            if x > width.saturating_sub(size / 2) || y > height.saturating_sub(size) {
                break;
            }

            if b == b'\r' {
                y = y.saturating_add(size);
                x = line_start;
            } else if style.size > MAX_ASCII_SIZE {
                let small = style.with_size(MAX_ASCII_SIZE);
                self.show_char(fonts, x, y, b, &small)?;
                x = x.saturating_add(small.advance());
            } else {
                self.show_char(fonts, x, y, b, style)?;
                x = x.saturating_add(style.advance());
            }
            i += 1;
        }

        Ok((x, y))
    }

    /// Draw a string centered on an 8 px character grid
    ///
    /// The offset `(width - len × 8) / 2` is added to `x`.
    fn show_str_centered(
        &mut self,
        fonts: &FontSet<'_>,
        x: u16,
        y: u16,
        text: &[u8],
        style: &TextStyle,
    ) -> Result<(u16, u16), Self::Error> {
        let (width, _) = self.size();
        let len = text.iter().position(|&b| b == 0).unwrap_or(text.len()) as u32;
        let offset = (width as u32).saturating_sub(len * 8) / 2;
        self.show_str(fonts, x.saturating_add(offset as u16), y, text, style)
    }
}

// Blanket implementation for all Gram types
impl<T: Gram + ?Sized> TextExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{AsciiFont, WideGlyph, PRINTABLE_COUNT};
    use crate::testing::FrameBuffer;

    /// Each glyph's first row is its own character code, other rows blank
    const fn code_rows<const N: usize>(height: usize) -> [u8; N] {
        let mut rows = [0u8; N];
        let mut i = 0;
        while i < PRINTABLE_COUNT {
            rows[i * height] = i as u8 + b' ';
            i += 1;
        }
        rows
    }

    static ROWS_1206: [u8; PRINTABLE_COUNT * 12] = code_rows(12);
    static ROWS_1608: [u8; PRINTABLE_COUNT * 16] = code_rows(16);
    static ASCII_1206: AsciiFont = AsciiFont::new(6, 12, &ROWS_1206);
    static ASCII_1608: AsciiFont = AsciiFont::new(8, 16, &ROWS_1608);

    static DEGREE_MASK: [u8; 32] = {
        let mut m = [0u8; 32];
        m[0] = 0x80;
        m[1] = 0x01;
        m[30] = 0xFF;
        m[31] = 0xFF;
        m
    };
    static WIDE_GLYPHS: [WideGlyph; 1] = [WideGlyph {
        code: [0xA1, 0xE6],
        mask: &DEGREE_MASK,
    }];
    static WIDE16: WideFont = WideFont::new(16, &WIDE_GLYPHS);

    static ASCII: [&AsciiFont; 2] = [&ASCII_1206, &ASCII_1608];
    static WIDE: [&WideFont; 1] = [&WIDE16];

    fn fonts() -> FontSet<'static> {
        FontSet {
            ascii: &ASCII,
            wide: &WIDE,
        }
    }

    const FG: Rgb565 = Rgb565::RED;
    const BG: Rgb565 = Rgb565::WHITE;

    /// Read back the first row of an 8-wide glyph cell
    fn first_row(fb: &FrameBuffer, x: u16, y: u16) -> u8 {
        (0..8).fold(0u8, |acc, dx| {
            acc | (((fb.pixel(x + dx, y) == FG) as u8) << dx)
        })
    }

    #[test]
    fn test_show_char_block_is_lsb_first() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::new(12, FG, BG);
        // '!' = 0x21: bits 0 and 5
        fb.show_char(&fonts(), 10, 20, b'!', &style).unwrap();

        assert_eq!(
            fb.windows,
            vec![Window::new(10, 20, 15, 31), Window::full_screen(480, 320)]
        );
        assert_eq!(fb.writes.len(), 6 * 12);
        assert_eq!(fb.pixel(10, 20), FG);
        assert_eq!(fb.pixel(15, 20), FG);
        assert_eq!(fb.pixel(11, 20), BG);
        assert_eq!(fb.pixel(10, 21), BG);
    }

    #[test]
    fn test_show_char_point_mode_plots_set_bits_only() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::transparent(16, FG);
        // 'A' = 0x41: bits 0 and 6
        fb.show_char(&fonts(), 0, 0, b'A', &style).unwrap();

        assert_eq!(fb.writes, vec![(0, 0), (6, 0)]);
        assert_eq!(fb.pixel(1, 0), Rgb565::BLACK);
        assert_eq!(*fb.windows.last().unwrap(), Window::full_screen(480, 320));
    }

    #[test]
    fn test_show_char_unknown_size_draws_nothing() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.show_char(&fonts(), 0, 0, b'A', &TextStyle::new(20, FG, BG))
            .unwrap();
        assert!(fb.windows.is_empty());
    }

    #[test]
    fn test_show_string_advances_half_size() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::new(16, FG, BG);
        let end = fb.show_string(&fonts(), 0, 0, "HELLO", &style).unwrap();

        assert_eq!(end, (5 * 8, 0));
        assert_eq!(first_row(&fb, 0, 0), b'H');
        assert_eq!(first_row(&fb, 32, 0), b'O');

        let end = fb.show_string(&fonts(), 0, 40, "ABC", &style.with_size(12)).unwrap();
        assert_eq!(end, (18, 40));
    }

    #[test]
    fn test_show_string_stops_at_non_printable() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_string(&fonts(), 0, 0, "AB\nCD", &TextStyle::default())
            .unwrap();
        assert_eq!(end, (16, 0));
    }

    #[test]
    fn test_show_string_stops_at_edge() {
        let mut fb = FrameBuffer::new(20, 20);
        let end = fb
            .show_string(&fonts(), 0, 0, "ABCDEF", &TextStyle::default())
            .unwrap();
        // Glyphs at 0 and 8; one at 16 would end at x = 23
        assert_eq!(end, (16, 0));
        assert_eq!(fb.windows.iter().filter(|w| w.height() == 16).count(), 2);
    }

    #[test]
    fn test_show_number_blanks_leading_zeros() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::transparent(16, FG);
        fb.show_number(&fonts(), 0, 0, 42, 4, &style).unwrap();

        assert_eq!(first_row(&fb, 0, 0), b' ');
        assert_eq!(first_row(&fb, 8, 0), b' ');
        assert_eq!(first_row(&fb, 16, 0), b'4');
        assert_eq!(first_row(&fb, 24, 0), b'2');
        // Forced opaque
        assert_eq!(fb.writes.len(), 4 * 8 * 16);
    }

    #[test]
    fn test_show_number_zero_keeps_last_digit() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.show_number(&fonts(), 0, 0, 0, 3, &TextStyle::new(16, FG, BG))
            .unwrap();
        assert_eq!(first_row(&fb, 0, 0), b' ');
        assert_eq!(first_row(&fb, 8, 0), b' ');
        assert_eq!(first_row(&fb, 16, 0), b'0');
    }

    #[test]
    fn test_show_number_inner_zeros_are_drawn() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.show_number(&fonts(), 0, 0, 1005, 4, &TextStyle::new(16, FG, BG))
            .unwrap();
        assert_eq!(first_row(&fb, 0, 0), b'1');
        assert_eq!(first_row(&fb, 8, 0), b'0');
        assert_eq!(first_row(&fb, 16, 0), b'0');
        assert_eq!(first_row(&fb, 24, 0), b'5');
    }

    #[test]
    fn test_wide_glyph_is_msb_first() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::new(16, FG, BG);
        fb.draw_wide_glyph(&WIDE16, 100, 50, [0xA1, 0xE6], &style)
            .unwrap();

        assert_eq!(fb.windows[0], Window::new(100, 50, 115, 65));
        assert_eq!(fb.writes.len(), 256);
        assert_eq!(fb.pixel(100, 50), FG);
        assert_eq!(fb.pixel(115, 50), FG);
        assert_eq!(fb.pixel(101, 50), BG);
        assert!((100..116).all(|x| fb.pixel(x, 65) == FG));
    }

    #[test]
    fn test_wide_glyph_point_mode() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::transparent(16, FG);
        fb.draw_wide_glyph(&WIDE16, 0, 0, [0xA1, 0xE6], &style).unwrap();
        assert_eq!(fb.writes.len(), 2 + 16);
    }

    #[test]
    fn test_wide_glyph_unmatched_draws_nothing() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_wide_glyph(&WIDE16, 0, 0, [0xB0, 0xA1], &TextStyle::default())
            .unwrap();
        assert!(fb.windows.is_empty());
    }

    #[test]
    fn test_show_str_mixed() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::new(16, FG, BG);
        let end = fb
            .show_str(&fonts(), 0, 0, b"A\xA1\xE6B", &style)
            .unwrap();

        assert_eq!(end, (32, 0));
        let cells: Vec<Window> = fb
            .windows
            .iter()
            .copied()
            .filter(|w| *w != Window::full_screen(480, 320))
            .collect();
        assert_eq!(
            cells,
            vec![
                Window::new(0, 0, 7, 15),
                Window::new(8, 0, 23, 15),
                Window::new(24, 0, 31, 15),
            ]
        );
    }

    #[test]
    fn test_show_str_carriage_return() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 4, 0, b"AB\rC", &TextStyle::new(16, FG, BG))
            .unwrap();
        assert_eq!(end, (12, 16));
        assert_eq!(first_row(&fb, 4, 0), b'A');
        assert_eq!(first_row(&fb, 12, 0), b'B');
        assert_eq!(first_row(&fb, 4, 16), b'C');
    }

    #[test]
    fn test_show_str_large_size_uses_16px_ascii() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 0, 0, b"AB", &TextStyle::new(24, FG, BG))
            .unwrap();
        assert_eq!(end, (16, 0));
        assert_eq!(fb.windows[0], Window::new(0, 0, 7, 15));
    }

    #[test]
    fn test_show_str_unmatched_wide_still_advances() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 0, 0, b"\xB0\xA1A", &TextStyle::default())
            .unwrap();
        assert_eq!(end, (24, 0));
        assert_eq!(fb.windows[0], Window::new(16, 0, 23, 15));
    }

    #[test]
    fn test_show_str_dangling_lead_byte_stops() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 0, 0, b"A\xA1", &TextStyle::default())
            .unwrap();
        assert_eq!(end, (8, 0));
    }

    #[test]
    fn test_show_str_stops_at_nul_and_edge() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 0, 0, b"AB\0CD", &TextStyle::default())
            .unwrap();
        assert_eq!(end, (16, 0));

        // x = 472 still fits an 8 px glyph, 480 does not
        let end = fb
            .show_str(&fonts(), 472, 0, b"XY", &TextStyle::default())
            .unwrap();
        assert_eq!(end, (480, 0));
    }

    #[test]
    fn test_show_str_centered() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.show_str_centered(&fonts(), 0, 100, b"ABCD", &TextStyle::default())
            .unwrap();
        assert_eq!(fb.windows[0], Window::new(224, 100, 231, 115));
    }

    #[test]
    fn test_show_char_block_skips_cell_past_edge() {
        let mut fb = FrameBuffer::new(480, 320);
        let style = TextStyle::new(16, FG, BG);
        fb.show_char(&fonts(), 476, 0, b'A', &style).unwrap();
        fb.show_char(&fonts(), 0, 310, b'A', &style).unwrap();
        assert!(fb.windows.is_empty());

        // Flush with the edge still draws
        fb.show_char(&fonts(), 472, 304, b'A', &style).unwrap();
        assert_eq!(fb.windows[0], Window::new(472, 304, 479, 319));
    }

    #[test]
    fn test_show_char_point_mode_clips_at_edge() {
        let mut fb = FrameBuffer::new(480, 320);
        // 'A' = 0x41: bits 0 and 6, the second lands off the panel
        fb.show_char(&fonts(), 476, 0, b'A', &TextStyle::transparent(16, FG))
            .unwrap();
        assert_eq!(fb.writes, vec![(476, 0)]);
    }

    #[test]
    fn test_show_string_near_edge_draws_nothing() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_string(&fonts(), 476, 0, "AB", &TextStyle::new(16, FG, BG))
            .unwrap();
        assert_eq!(end, (476, 0));
        assert!(fb.windows.is_empty());
    }

    #[test]
    fn test_wide_glyph_block_skips_cell_past_edge() {
        let mut fb = FrameBuffer::new(480, 320);
        fb.draw_wide_glyph(&WIDE16, 470, 0, [0xA1, 0xE6], &TextStyle::new(16, FG, BG))
            .unwrap();
        assert!(fb.windows.is_empty());
    }

    #[test]
    fn test_show_str_control_byte_advances_without_drawing() {
        let mut fb = FrameBuffer::new(480, 320);
        let end = fb
            .show_str(&fonts(), 0, 0, b"A\tB", &TextStyle::new(16, FG, BG))
            .unwrap();

        assert_eq!(end, (24, 0));
        let cells: Vec<Window> = fb
            .windows
            .iter()
            .copied()
            .filter(|w| *w != Window::full_screen(480, 320))
            .collect();
        assert_eq!(cells, vec![Window::new(0, 0, 7, 15), Window::new(16, 0, 23, 15)]);
        assert_eq!(first_row(&fb, 16, 0), b'B');
    }
}
