//! 24×24 double-byte symbols (GB2312 row 1)
//!
//! `3` mask bytes per row, MSB is the leftmost pixel.

use hx8357_core::font::{WideFont, WideGlyph};

#[rustfmt::skip]
static GLYPHS: [WideGlyph; 12] = [
    // ℃
    WideGlyph {
        code: [0xA1, 0xE6],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x1E, 0x00, 0x00,
            0x32, 0x0F, 0x80,
            0x22, 0x3D, 0xE0,
            0x32, 0x60, 0x20,
            0x1C, 0xC0, 0x00,
            0x00, 0x80, 0x00,
            0x01, 0x80, 0x00,
            0x01, 0x80, 0x00,
            0x01, 0x00, 0x00,
            0x01, 0x80, 0x00,
            0x01, 0x80, 0x00,
            0x00, 0x80, 0x00,
            0x00, 0xC0, 0x00,
            0x00, 0x60, 0x60,
            0x00, 0x3F, 0xE0,
            0x00, 0x0F, 0x80,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ●
    WideGlyph {
        code: [0xA1, 0xF1],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0xFF, 0x00,
            0x03, 0xFF, 0xC0,
            0x07, 0xFF, 0xE0,
            0x0F, 0xFF, 0xF0,
            0x0F, 0xFF, 0xF0,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x3F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xFC,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x0F, 0xFF, 0xF0,
            0x0F, 0xFF, 0xF0,
            0x07, 0xFF, 0xE0,
            0x03, 0xFF, 0xC0,
            0x00, 0xFF, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ○
    WideGlyph {
        code: [0xA1, 0xF0],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0xFF, 0x00,
            0x03, 0x81, 0xC0,
            0x06, 0x00, 0x60,
            0x0C, 0x00, 0x30,
            0x08, 0x00, 0x10,
            0x18, 0x00, 0x18,
            0x10, 0x00, 0x08,
            0x10, 0x00, 0x08,
            0x30, 0x00, 0x0C,
            0x30, 0x00, 0x0C,
            0x10, 0x00, 0x08,
            0x10, 0x00, 0x08,
            0x18, 0x00, 0x18,
            0x08, 0x00, 0x10,
            0x0C, 0x00, 0x30,
            0x06, 0x00, 0x60,
            0x03, 0x81, 0xC0,
            0x00, 0xFF, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ■
    WideGlyph {
        code: [0xA1, 0xF6],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // □
    WideGlyph {
        code: [0xA1, 0xF5],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x18, 0x00, 0x18,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ◆
    WideGlyph {
        code: [0xA1, 0xF4],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0xFF, 0x00,
            0x01, 0xFF, 0x80,
            0x03, 0xFF, 0xC0,
            0x07, 0xFF, 0xE0,
            0x0F, 0xFF, 0xF0,
            0x1F, 0xFF, 0xF8,
            0x3F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xFC,
            0x1F, 0xFF, 0xF8,
            0x0F, 0xFF, 0xF0,
            0x07, 0xFF, 0xE0,
            0x03, 0xFF, 0xC0,
            0x01, 0xFF, 0x80,
            0x00, 0xFF, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ★
    WideGlyph {
        code: [0xA1, 0xEF],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x07, 0xFF, 0xE0,
            0x1F, 0xFF, 0xF8,
            0x0F, 0xFF, 0xF0,
            0x07, 0xFF, 0xE0,
            0x01, 0xFF, 0x80,
            0x00, 0xFF, 0x00,
            0x01, 0xFF, 0x80,
            0x01, 0xFF, 0x80,
            0x01, 0xFF, 0x80,
            0x01, 0xC3, 0x80,
            0x03, 0x81, 0xC0,
            0x02, 0x00, 0x40,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ▲
    WideGlyph {
        code: [0xA1, 0xF8],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0xFF, 0x00,
            0x00, 0xFF, 0x00,
            0x01, 0xFF, 0x80,
            0x03, 0xFF, 0xC0,
            0x03, 0xFF, 0xC0,
            0x07, 0xFF, 0xE0,
            0x07, 0xFF, 0xE0,
            0x0F, 0xFF, 0xF0,
            0x0F, 0xFF, 0xF0,
            0x1F, 0xFF, 0xF8,
            0x1F, 0xFF, 0xF8,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // →
    WideGlyph {
        code: [0xA1, 0xFA],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x02, 0x00,
            0x00, 0x03, 0x00,
            0x00, 0x03, 0xC0,
            0x00, 0x03, 0xE0,
            0x3F, 0xFF, 0xF0,
            0x3F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xF0,
            0x00, 0x03, 0xE0,
            0x00, 0x03, 0xC0,
            0x00, 0x03, 0x00,
            0x00, 0x02, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ←
    WideGlyph {
        code: [0xA1, 0xFB],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x40, 0x00,
            0x00, 0xC0, 0x00,
            0x03, 0xC0, 0x00,
            0x07, 0xC0, 0x00,
            0x0F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xFC,
            0x3F, 0xFF, 0xFC,
            0x0F, 0xFF, 0xFC,
            0x07, 0xC0, 0x00,
            0x03, 0xC0, 0x00,
            0x00, 0xC0, 0x00,
            0x00, 0x40, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ↑
    WideGlyph {
        code: [0xA1, 0xFC],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0xFF, 0x00,
            0x00, 0xFF, 0x00,
            0x01, 0xFF, 0x80,
            0x03, 0xFF, 0xC0,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
    // ↓
    WideGlyph {
        code: [0xA1, 0xFD],
        mask: &[
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x3C, 0x00,
            0x03, 0xFF, 0xC0,
            0x01, 0xFF, 0x80,
            0x00, 0xFF, 0x00,
            0x00, 0xFF, 0x00,
            0x00, 0x7E, 0x00,
            0x00, 0x3C, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x18, 0x00,
            0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,
        ],
    },
];

pub static GB24: WideFont = WideFont::new(24, &GLYPHS);
