//! Codeword unpacking
//!
//! Inverse of [`PackBuffer`](crate::PackBuffer): walks a stream of 16-bit
//! words MSB-first and yields 9-bit codewords. Useful for checking what a
//! driver put on the bus, or for decoding a logic analyzer capture.

use crate::codeword::{Codeword, CODEWORD_BITS};
use crate::pack::WordOrder;

/// Reassemble 16-bit words from a transport buffer
///
/// A trailing odd byte is ignored.
pub fn decode_bytes(bytes: &[u8], order: WordOrder) -> impl Iterator<Item = u16> + '_ {
    bytes
        .chunks_exact(2)
        .map(move |pair| order.from_bytes([pair[0], pair[1]]))
}

/// Iterator of codewords over a word stream
///
/// Stops when fewer than 9 bits remain.
pub struct Unpacker<I> {
    words: I,
    /// Pending bits, left-aligned
    acc: u32,
    bits: u32,
}

impl<I: Iterator<Item = u16>> Unpacker<I> {
    pub fn new<W>(words: W) -> Self
    where
        W: IntoIterator<IntoIter = I>,
    {
        Self {
            words: words.into_iter(),
            acc: 0,
            bits: 0,
        }
    }
}

impl<I: Iterator<Item = u16>> Iterator for Unpacker<I> {
    type Item = Codeword;

    fn next(&mut self) -> Option<Codeword> {
        while self.bits < CODEWORD_BITS {
            let word = self.words.next()?;
            self.acc |= (word as u32) << (16 - self.bits);
            self.bits += 16;
        }

        let bits = (self.acc >> (32 - CODEWORD_BITS)) as u16;
        self.acc <<= CODEWORD_BITS;
        self.bits -= CODEWORD_BITS;
        Some(Codeword::from_bits(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_known_pattern() {
        // data(0xFF), command(0x00), then 14 zero bits of padding
        let words = [0xFF80u16, 0x0000];
        let decoded: Vec<Codeword> = Unpacker::new(words).collect();
        assert_eq!(
            decoded,
            vec![
                Codeword::data(0xFF),
                Codeword::command(0x00),
                Codeword::command(0x00),
            ]
        );
    }

    #[test]
    fn test_unpack_stops_on_partial_codeword() {
        // 16 bits hold one codeword plus 7 spare bits
        let decoded: Vec<Codeword> = Unpacker::new([0x8000u16]).collect();
        assert_eq!(decoded, vec![Codeword::data(0x00)]);
    }

    #[test]
    fn test_decode_bytes_word_order() {
        let bytes = [0x12, 0x34, 0x56];
        let be: Vec<u16> = decode_bytes(&bytes, WordOrder::BigEndian).collect();
        let le: Vec<u16> = decode_bytes(&bytes, WordOrder::LittleEndian).collect();
        assert_eq!(be, vec![0x1234]);
        assert_eq!(le, vec![0x3412]);
    }
}
