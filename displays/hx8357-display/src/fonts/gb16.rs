//! 16×16 double-byte symbols (GB2312 row 1)
//!
//! `2` mask bytes per row, MSB is the leftmost pixel.

use hx8357_core::font::{WideFont, WideGlyph};

#[rustfmt::skip]
static GLYPHS: [WideGlyph; 12] = [
    // ℃
    WideGlyph {
        code: [0xA1, 0xE6],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x38, 0x00,
            0x69, 0xF0,
            0x3B, 0x10,
            0x06, 0x00,
            0x04, 0x00,
            0x04, 0x00,
            0x04, 0x00,
            0x06, 0x00,
            0x03, 0x10,
            0x01, 0xF8,
            0x00, 0x40,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ●
    WideGlyph {
        code: [0xA1, 0xF1],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x07, 0xE0,
            0x1F, 0xF8,
            0x1F, 0xF8,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x1F, 0xF8,
            0x1F, 0xF8,
            0x07, 0xE0,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ○
    WideGlyph {
        code: [0xA1, 0xF0],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x07, 0xE0,
            0x1C, 0x38,
            0x18, 0x18,
            0x30, 0x0C,
            0x20, 0x04,
            0x20, 0x04,
            0x20, 0x04,
            0x20, 0x04,
            0x30, 0x0C,
            0x18, 0x18,
            0x1C, 0x38,
            0x07, 0xE0,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ■
    WideGlyph {
        code: [0xA1, 0xF6],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // □
    WideGlyph {
        code: [0xA1, 0xF5],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x30, 0x0C,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ◆
    WideGlyph {
        code: [0xA1, 0xF4],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x01, 0x80,
            0x03, 0xC0,
            0x07, 0xE0,
            0x0F, 0xF0,
            0x1F, 0xF8,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x1F, 0xF8,
            0x0F, 0xF0,
            0x07, 0xE0,
            0x03, 0xC0,
            0x01, 0x80,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ★
    WideGlyph {
        code: [0xA1, 0xEF],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x01, 0x80,
            0x01, 0x80,
            0x01, 0x80,
            0x7F, 0xFE,
            0x1F, 0xF8,
            0x0F, 0xF0,
            0x07, 0xE0,
            0x07, 0xE0,
            0x07, 0xE0,
            0x0E, 0x70,
            0x08, 0x10,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ▲
    WideGlyph {
        code: [0xA1, 0xF8],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x01, 0x80,
            0x03, 0xC0,
            0x03, 0xC0,
            0x07, 0xE0,
            0x07, 0xE0,
            0x0F, 0xF0,
            0x0F, 0xF0,
            0x1F, 0xF8,
            0x1F, 0xF8,
            0x3F, 0xFC,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // →
    WideGlyph {
        code: [0xA1, 0xFA],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x40,
            0x00, 0x70,
            0x3F, 0xF8,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xF8,
            0x00, 0x70,
            0x00, 0x40,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ←
    WideGlyph {
        code: [0xA1, 0xFB],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x02, 0x00,
            0x0E, 0x00,
            0x1F, 0xFC,
            0x3F, 0xFC,
            0x3F, 0xFC,
            0x1F, 0xFC,
            0x0E, 0x00,
            0x02, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ↑
    WideGlyph {
        code: [0xA1, 0xFC],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x01, 0x80,
            0x03, 0xC0,
            0x07, 0xE0,
            0x07, 0xE0,
            0x0F, 0xF0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
    // ↓
    WideGlyph {
        code: [0xA1, 0xFD],
        mask: &[
            0x00, 0x00,
            0x00, 0x00,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x03, 0xC0,
            0x0F, 0xF0,
            0x07, 0xE0,
            0x07, 0xE0,
            0x03, 0xC0,
            0x01, 0x80,
            0x00, 0x00,
            0x00, 0x00,
        ],
    },
];

pub static GB16: WideFont = WideFont::new(16, &GLYPHS);
