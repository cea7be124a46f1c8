//! RGB565 colors

/// 16-bit packed color: RRRRR GGGGGG BBBBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const WHITE: Self = Self(0xFFFF);
    pub const BLACK: Self = Self(0x0000);
    pub const BLUE: Self = Self(0x001F);
    pub const BRED: Self = Self(0xF81F);
    pub const GRED: Self = Self(0xFFE0);
    pub const GBLUE: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x7FFF);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const BROWN: Self = Self(0xBC40);
    pub const BRRED: Self = Self(0xFC07);
    pub const GRAY: Self = Self(0x8430);
    pub const DARKBLUE: Self = Self(0x01CF);
    pub const LIGHTBLUE: Self = Self(0x7D7C);
    pub const GRAYBLUE: Self = Self(0x5458);
    pub const LIGHTGREEN: Self = Self(0x841F);
    pub const LIGHTGRAY: Self = Self(0xEF5B);
    pub const LGRAY: Self = Self(0xC618);
    pub const LGRAYBLUE: Self = Self(0xA651);
    pub const LBBLUE: Self = Self(0x2B12);

    /// Truncate 8-bit channels to 5/6/5 bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Build from a little-endian byte pair, as stored in image data
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Sent first on the wire
    pub const fn high_byte(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn low_byte(self) -> u8 {
        self.0 as u8
    }

    /// Bitwise complement, for panels wired with inverted color
    pub const fn inverted(self) -> Self {
        Self(!self.0)
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb888() {
        assert_eq!(Rgb565::from_rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb888(255, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb888(0, 255, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::from_rgb888(0, 0, 255), Rgb565::BLUE);
    }

    #[test]
    fn test_byte_split() {
        let c = Rgb565(0xBC40);
        assert_eq!(c.high_byte(), 0xBC);
        assert_eq!(c.low_byte(), 0x40);
        assert_eq!(Rgb565::from_le_bytes([0x40, 0xBC]), c);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Rgb565::WHITE.inverted(), Rgb565::BLACK);
        assert_eq!(Rgb565::BLUE.inverted().raw(), 0xFFE0);
    }
}
