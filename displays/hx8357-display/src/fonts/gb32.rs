//! 32×32 double-byte symbols (GB2312 row 1)
//!
//! `4` mask bytes per row, MSB is the leftmost pixel.

use hx8357_core::font::{WideFont, WideGlyph};

#[rustfmt::skip]
static GLYPHS: [WideGlyph; 12] = [
    // ℃
    WideGlyph {
        code: [0xA1, 0xE6],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x0F, 0x80, 0x00, 0x00,
            0x19, 0x80, 0x78, 0x00,
            0x18, 0xC3, 0xFF, 0x00,
            0x10, 0xC7, 0x87, 0x80,
            0x18, 0xCE, 0x00, 0x80,
            0x0F, 0x9C, 0x00, 0x00,
            0x07, 0x38, 0x00, 0x00,
            0x00, 0x30, 0x00, 0x00,
            0x00, 0x30, 0x00, 0x00,
            0x00, 0x60, 0x00, 0x00,
            0x00, 0x60, 0x00, 0x00,
            0x00, 0x60, 0x00, 0x00,
            0x00, 0x60, 0x00, 0x00,
            0x00, 0x30, 0x00, 0x00,
            0x00, 0x30, 0x00, 0x00,
            0x00, 0x30, 0x00, 0x00,
            0x00, 0x18, 0x00, 0x00,
            0x00, 0x0C, 0x00, 0x00,
            0x00, 0x0F, 0x03, 0x80,
            0x00, 0x03, 0xFF, 0x80,
            0x00, 0x00, 0xFE, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ●
    WideGlyph {
        code: [0xA1, 0xF1],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x01, 0xFF, 0xFF, 0x80,
            0x03, 0xFF, 0xFF, 0xC0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x01, 0xFF, 0xFF, 0x80,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ○
    WideGlyph {
        code: [0xA1, 0xF0],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x78, 0x1E, 0x00,
            0x01, 0xE0, 0x07, 0x80,
            0x03, 0x80, 0x01, 0xC0,
            0x03, 0x00, 0x00, 0xC0,
            0x06, 0x00, 0x00, 0x60,
            0x0E, 0x00, 0x00, 0x70,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x18, 0x00, 0x00, 0x18,
            0x18, 0x00, 0x00, 0x18,
            0x18, 0x00, 0x00, 0x18,
            0x18, 0x00, 0x00, 0x18,
            0x18, 0x00, 0x00, 0x18,
            0x18, 0x00, 0x00, 0x18,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0E, 0x00, 0x00, 0x70,
            0x06, 0x00, 0x00, 0x60,
            0x03, 0x00, 0x00, 0xC0,
            0x03, 0x80, 0x01, 0xC0,
            0x01, 0xE0, 0x07, 0x80,
            0x00, 0x78, 0x1E, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ■
    WideGlyph {
        code: [0xA1, 0xF6],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // □
    WideGlyph {
        code: [0xA1, 0xF5],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0C, 0x00, 0x00, 0x30,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ◆
    WideGlyph {
        code: [0xA1, 0xF4],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0xFF, 0xFF, 0x00,
            0x01, 0xFF, 0xFF, 0x80,
            0x03, 0xFF, 0xFF, 0xC0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x01, 0xFF, 0xFF, 0x80,
            0x00, 0xFF, 0xFF, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ★
    WideGlyph {
        code: [0xA1, 0xEF],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x01, 0xFF, 0xFF, 0x80,
            0x00, 0xFF, 0xFF, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x7C, 0x3E, 0x00,
            0x00, 0x78, 0x1E, 0x00,
            0x00, 0xE0, 0x07, 0x00,
            0x00, 0xC0, 0x03, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ▲
    WideGlyph {
        code: [0xA1, 0xF8],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0xFF, 0xFF, 0x00,
            0x00, 0xFF, 0xFF, 0x00,
            0x01, 0xFF, 0xFF, 0x80,
            0x03, 0xFF, 0xFF, 0xC0,
            0x03, 0xFF, 0xFF, 0xC0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x07, 0xFF, 0xFF, 0xE0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x0F, 0xFF, 0xFF, 0xF0,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // →
    WideGlyph {
        code: [0xA1, 0xFA],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x20, 0x00,
            0x00, 0x00, 0x30, 0x00,
            0x00, 0x00, 0x38, 0x00,
            0x00, 0x00, 0x3E, 0x00,
            0x00, 0x00, 0x3F, 0x00,
            0x00, 0x00, 0x3F, 0x80,
            0x1F, 0xFF, 0xFF, 0xC0,
            0x1F, 0xFF, 0xFF, 0xF0,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF0,
            0x1F, 0xFF, 0xFF, 0xC0,
            0x00, 0x00, 0x3F, 0x80,
            0x00, 0x00, 0x3F, 0x00,
            0x00, 0x00, 0x3E, 0x00,
            0x00, 0x00, 0x38, 0x00,
            0x00, 0x00, 0x30, 0x00,
            0x00, 0x00, 0x20, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ←
    WideGlyph {
        code: [0xA1, 0xFB],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x04, 0x00, 0x00,
            0x00, 0x0C, 0x00, 0x00,
            0x00, 0x1C, 0x00, 0x00,
            0x00, 0x7C, 0x00, 0x00,
            0x00, 0xFC, 0x00, 0x00,
            0x01, 0xFC, 0x00, 0x00,
            0x03, 0xFF, 0xFF, 0xF8,
            0x0F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x1F, 0xFF, 0xFF, 0xF8,
            0x0F, 0xFF, 0xFF, 0xF8,
            0x03, 0xFF, 0xFF, 0xF8,
            0x01, 0xFC, 0x00, 0x00,
            0x00, 0xFC, 0x00, 0x00,
            0x00, 0x7C, 0x00, 0x00,
            0x00, 0x1C, 0x00, 0x00,
            0x00, 0x0C, 0x00, 0x00,
            0x00, 0x04, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ↑
    WideGlyph {
        code: [0xA1, 0xFC],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0xFF, 0xFF, 0x00,
            0x01, 0xFF, 0xFF, 0x80,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
    // ↓
    WideGlyph {
        code: [0xA1, 0xFD],
        mask: &[
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x01, 0xFF, 0xFF, 0x80,
            0x00, 0xFF, 0xFF, 0x00,
            0x00, 0x7F, 0xFE, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x3F, 0xFC, 0x00,
            0x00, 0x1F, 0xF8, 0x00,
            0x00, 0x0F, 0xF0, 0x00,
            0x00, 0x07, 0xE0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x03, 0xC0, 0x00,
            0x00, 0x01, 0x80, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    },
];

pub static GB32: WideFont = WideFont::new(32, &GLYPHS);
