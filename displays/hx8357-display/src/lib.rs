//! Font assets for HX8357 panels
//!
//! Bundled tables:
//!
//! | Table        | Kind       | Cell    |
//! |--------------|------------|---------|
//! | `ASCII_1206` | ASCII      | 6 × 12  |
//! | `ASCII_1608` | ASCII      | 8 × 16  |
//! | `GB16`       | GB2312     | 16 × 16 |
//! | `GB24`       | GB2312     | 24 × 24 |
//! | `GB32`       | GB2312     | 32 × 32 |
//!
//! The double-byte tables only carry a handful of row-1 symbols (arrows,
//! shapes, `℃`). Pass [`FONTS`] to the text renderer in `hx8357-core`.

#![no_std]

mod fonts {
    pub mod ascii_1206;
    pub mod ascii_1608;
    pub mod gb16;
    pub mod gb24;
    pub mod gb32;
}

use hx8357_core::font::{AsciiFont, FontSet, WideFont};

pub use fonts::ascii_1206::ASCII_1206;
pub use fonts::ascii_1608::ASCII_1608;
pub use fonts::gb16::GB16;
pub use fonts::gb24::GB24;
pub use fonts::gb32::GB32;

/// GB2312 codes of the bundled double-byte symbols
pub mod symbols {
    pub const DEGREE_CELSIUS: [u8; 2] = [0xA1, 0xE6];
    pub const BLACK_CIRCLE: [u8; 2] = [0xA1, 0xF1];
    pub const WHITE_CIRCLE: [u8; 2] = [0xA1, 0xF0];
    pub const BLACK_SQUARE: [u8; 2] = [0xA1, 0xF6];
    pub const WHITE_SQUARE: [u8; 2] = [0xA1, 0xF5];
    pub const BLACK_DIAMOND: [u8; 2] = [0xA1, 0xF4];
    pub const BLACK_STAR: [u8; 2] = [0xA1, 0xEF];
    pub const BLACK_TRIANGLE: [u8; 2] = [0xA1, 0xF8];
    pub const ARROW_RIGHT: [u8; 2] = [0xA1, 0xFA];
    pub const ARROW_LEFT: [u8; 2] = [0xA1, 0xFB];
    pub const ARROW_UP: [u8; 2] = [0xA1, 0xFC];
    pub const ARROW_DOWN: [u8; 2] = [0xA1, 0xFD];
}

static ASCII: [&AsciiFont; 2] = [&ASCII_1206, &ASCII_1608];
static WIDE: [&WideFont; 3] = [&GB16, &GB24, &GB32];

/// Every bundled table
pub static FONTS: FontSet<'static> = FontSet {
    ascii: &ASCII,
    wide: &WIDE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use hx8357_core::font::PRINTABLE_COUNT;

    fn lit(rows: &[u8]) -> u32 {
        rows.iter().map(|r| r.count_ones()).sum()
    }

    #[test]
    fn test_ascii_table_sizes() {
        assert_eq!(ASCII_1206.rows.len(), PRINTABLE_COUNT * 12);
        assert_eq!(ASCII_1608.rows.len(), PRINTABLE_COUNT * 16);
        assert_eq!(ASCII_1206.width, 6);
        assert_eq!(ASCII_1608.width, 8);
    }

    #[test]
    fn test_ascii_glyphs_fit_cell() {
        for font in ASCII {
            let mask = if font.width >= 8 { 0xFF } else { (1u8 << font.width) - 1 };
            for ch in b' '..=b'~' {
                let rows = font.glyph(ch).unwrap();
                assert!(rows.iter().all(|r| r & !mask == 0), "{} overflows", ch as char);
            }
        }
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(lit(ASCII_1206.glyph(b' ').unwrap()), 0);
        assert!(lit(ASCII_1206.glyph(b'A').unwrap()) > 0);
        assert!(lit(ASCII_1608.glyph(b'A').unwrap()) > 0);
        // Double height
        assert_eq!(
            lit(ASCII_1608.glyph(b'H').unwrap()),
            2 * lit(ASCII_1206.glyph(b'H').unwrap())
        );
    }

    #[test]
    fn test_wide_masks_are_square() {
        for font in WIDE {
            assert!(!font.glyphs.is_empty());
            for glyph in font.glyphs {
                assert_eq!(glyph.mask.len(), font.bytes_per_row() * font.size as usize);
                assert!(lit(glyph.mask) > 0);
            }
        }
    }

    #[test]
    fn test_symbol_lookup() {
        for size in [16, 24, 32] {
            let font = FONTS.wide(size).unwrap();
            assert_eq!(font.size, size);
            assert!(font.find(symbols::DEGREE_CELSIUS).is_some());
            assert!(font.find(symbols::ARROW_DOWN).is_some());
            assert!(font.find([0xB0, 0xA1]).is_none());
        }
    }

    #[test]
    fn test_font_set() {
        assert_eq!(FONTS.ascii(12).map(|f| f.width), Some(6));
        assert_eq!(FONTS.ascii(16).map(|f| f.width), Some(8));
        assert!(FONTS.ascii(24).is_none());
        assert_eq!(FONTS.wide(12).map(|f| f.size), Some(16));
    }
}
