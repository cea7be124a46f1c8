//! Glyph table types
//!
//! Two table families:
//!
//! - [`AsciiFont`]: printable ASCII (`' '..='~'`), one byte per row, bit 0 is
//!   the leftmost pixel. Width is at most 8.
//! - [`WideFont`]: double-byte (GB2312) glyphs looked up by their 2-byte
//!   code, `size / 8` bytes per row, MSB is the leftmost pixel.
//!
//! The tables themselves live in the display crate; this module only knows
//! how to index them.

/// First code in an ASCII table
pub const FIRST_PRINTABLE: u8 = b' ';
/// Last code in an ASCII table
pub const LAST_PRINTABLE: u8 = b'~';
/// Glyphs in an ASCII table
pub const PRINTABLE_COUNT: usize = (LAST_PRINTABLE - FIRST_PRINTABLE) as usize + 1;

/// True for the codes an ASCII table covers
pub const fn is_printable(ch: u8) -> bool {
    ch >= FIRST_PRINTABLE && ch <= LAST_PRINTABLE
}

/// Fixed-width ASCII font
#[derive(Debug, Clone, Copy)]
pub struct AsciiFont {
    pub width: u8,
    pub height: u8,
    /// `PRINTABLE_COUNT × height` row bytes
    pub rows: &'static [u8],
}

impl AsciiFont {
    pub const fn new(width: u8, height: u8, rows: &'static [u8]) -> Self {
        Self {
            width,
            height,
            rows,
        }
    }

    /// Row bytes of `ch`, or `None` outside the printable range
    pub fn glyph(&self, ch: u8) -> Option<&'static [u8]> {
        if !is_printable(ch) {
            return None;
        }
        let height = self.height as usize;
        let start = (ch - FIRST_PRINTABLE) as usize * height;
        self.rows.get(start..start + height)
    }
}

/// One double-byte glyph
#[derive(Debug, Clone, Copy)]
pub struct WideGlyph {
    /// Code bytes, lead byte first
    pub code: [u8; 2],
    /// `size × size / 8` mask bytes, row-major, MSB first
    pub mask: &'static [u8],
}

/// Square double-byte font of `size` pixels
#[derive(Debug, Clone, Copy)]
pub struct WideFont {
    pub size: u8,
    pub glyphs: &'static [WideGlyph],
}

impl WideFont {
    pub const fn new(size: u8, glyphs: &'static [WideGlyph]) -> Self {
        Self { size, glyphs }
    }

    /// Mask bytes per glyph row
    pub const fn bytes_per_row(&self) -> usize {
        (self.size as usize + 7) / 8
    }

    /// First glyph with the given code
    pub fn find(&self, code: [u8; 2]) -> Option<&'static WideGlyph> {
        self.glyphs.iter().find(|g| g.code == code)
    }
}

/// The fonts available to the text renderer
#[derive(Debug, Clone, Copy)]
pub struct FontSet<'a> {
    pub ascii: &'a [&'a AsciiFont],
    pub wide: &'a [&'a WideFont],
}

impl<'a> FontSet<'a> {
    /// ASCII font of exactly this height
    pub fn ascii(&self, size: u8) -> Option<&'a AsciiFont> {
        self.ascii.iter().copied().find(|f| f.height == size)
    }

    /// Double-byte font for a text size
    ///
    /// Sizes other than 24 and 32 use the 16 px table.
    pub fn wide(&self, size: u8) -> Option<&'a WideFont> {
        let size = match size {
            24 | 32 => size,
            _ => 16,
        };
        self.wide.iter().copied().find(|f| f.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROWS: [u8; PRINTABLE_COUNT * 2] = {
        let mut rows = [0u8; PRINTABLE_COUNT * 2];
        // 'A' -> rows 0x11, 0x22
        rows[(b'A' - b' ') as usize * 2] = 0x11;
        rows[(b'A' - b' ') as usize * 2 + 1] = 0x22;
        rows
    };
    static TINY: AsciiFont = AsciiFont::new(2, 2, &ROWS);

    static MASK: [u8; 32] = [0xFF; 32];
    static GLYPHS: [WideGlyph; 2] = [
        WideGlyph { code: [0xA1, 0xE6], mask: &MASK },
        WideGlyph { code: [0xA1, 0xF1], mask: &MASK },
    ];
    static WIDE16: WideFont = WideFont::new(16, &GLYPHS);

    #[test]
    fn test_ascii_lookup() {
        assert_eq!(TINY.glyph(b'A'), Some(&[0x11, 0x22][..]));
        assert_eq!(TINY.glyph(b' '), Some(&[0, 0][..]));
        assert_eq!(TINY.glyph(0x7F), None);
        assert_eq!(TINY.glyph(b'\r'), None);
    }

    #[test]
    fn test_wide_lookup() {
        assert!(WIDE16.find([0xA1, 0xF1]).is_some());
        assert!(WIDE16.find([0xB0, 0xA1]).is_none());
        assert_eq!(WIDE16.bytes_per_row(), 2);
    }

    #[test]
    fn test_font_set_selection() {
        let set = FontSet {
            ascii: &[&TINY],
            wide: &[&WIDE16],
        };
        assert!(set.ascii(2).is_some());
        assert!(set.ascii(16).is_none());
        assert_eq!(set.wide(12).map(|f| f.size), Some(16));
        assert!(set.wide(24).is_none());
    }
}
