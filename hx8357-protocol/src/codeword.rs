//! 9-bit codewords
//!
//! Layout inside the `u16`:
//!
//! ```text
//!  15        9   8   7                 0
//! ┌───────────┬────┬───────────────────┐
//! │  unused   │ DC │     payload       │
//! └───────────┴────┴───────────────────┘
//! ```
//!
//! DC = 0 selects a command (register) byte, DC = 1 a parameter/data byte.

/// Bit position of the D/C flag
pub const DC_BIT: u16 = 1 << 8;

/// Mask of the significant bits
pub const CODEWORD_MASK: u16 = 0x01FF;

/// Number of significant bits per codeword
pub const CODEWORD_BITS: u32 = 9;

/// No-operation command; also terminates a pending memory write
pub const NOP: Codeword = Codeword::command(0x00);

/// One command or data byte tagged with its D/C flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Codeword(u16);

impl Codeword {
    /// Command (register select) codeword, DC = 0
    pub const fn command(byte: u8) -> Self {
        Self(byte as u16)
    }

    /// Data codeword, DC = 1
    pub const fn data(byte: u8) -> Self {
        Self(DC_BIT | byte as u16)
    }

    /// Rebuild a codeword from its 9 significant bits
    ///
    /// Bits above bit 8 are discarded.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & CODEWORD_MASK)
    }

    /// The 9 significant bits, right-aligned
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True for data codewords
    pub const fn is_data(self) -> bool {
        self.0 & DC_BIT != 0
    }

    /// True for command codewords
    pub const fn is_command(self) -> bool {
        !self.is_data()
    }

    /// The byte carried by this codeword
    pub const fn payload(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_layout() {
        let cw = Codeword::command(0x2C);
        assert_eq!(cw.bits(), 0x002C);
        assert!(cw.is_command());
        assert_eq!(cw.payload(), 0x2C);
    }

    #[test]
    fn test_data_layout() {
        let cw = Codeword::data(0xA5);
        assert_eq!(cw.bits(), 0x01A5);
        assert!(cw.is_data());
        assert_eq!(cw.payload(), 0xA5);
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        assert_eq!(Codeword::from_bits(0xFFFF), Codeword::data(0xFF));
        assert_eq!(Codeword::from_bits(0xFE00), Codeword::command(0x00));
    }

    #[test]
    fn test_nop_is_command_zero() {
        assert!(NOP.is_command());
        assert_eq!(NOP.payload(), 0);
    }
}
