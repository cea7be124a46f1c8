//! Codeword packing
//!
//! Codewords are appended MSB-first into a 32-bit accumulator; every time
//! 16 bits are available the top half is moved into the output buffer as one
//! SPI word. A batch holds 1024 codewords:
//!
//! - input: 1024 codewords × 9 bits = 9216 bits
//! - output: 576 words × 16 bits = 9216 bits (1152 bytes)
//!
//! so a full batch never carries bits over into the next one.

use crate::codeword::{Codeword, CODEWORD_BITS, NOP};

/// Codewords per batch
pub const CODEWORDS_PER_BATCH: usize = 1024;

/// 16-bit words produced by a full batch
pub const WORDS_PER_BATCH: usize = CODEWORDS_PER_BATCH * CODEWORD_BITS as usize / 16;

/// Bytes handed to the transport for a full batch
pub const BYTES_PER_BATCH: usize = WORDS_PER_BATCH * 2;

/// Codewords that pack into a whole number of 16-bit words
const WORD_ALIGNED_GROUP: usize = 16;

/// Byte order of each 16-bit word in the transport buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WordOrder {
    /// High byte first; what an 8-bit SPI bus needs to shift MSB-first
    #[default]
    BigEndian,
    /// Low byte first; a 16-bit spidev transfer from a little-endian host
    LittleEndian,
}

impl WordOrder {
    /// Serialize one word
    pub const fn to_bytes(self, word: u16) -> [u8; 2] {
        match self {
            WordOrder::BigEndian => word.to_be_bytes(),
            WordOrder::LittleEndian => word.to_le_bytes(),
        }
    }

    /// Deserialize one word
    pub const fn from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            WordOrder::BigEndian => u16::from_be_bytes(bytes),
            WordOrder::LittleEndian => u16::from_le_bytes(bytes),
        }
    }
}

/// Batch of codewords packed into 16-bit SPI words
pub struct PackBuffer {
    out: [u8; BYTES_PER_BATCH],
    /// Words already written to `out`
    words: usize,
    /// Pending bits, left-aligned
    acc: u32,
    /// Number of valid bits in `acc` (always < 16 between pushes)
    bits: u32,
    /// Codewords pushed since the last flush
    count: usize,
    order: WordOrder,
}

impl PackBuffer {
    /// Create an empty buffer
    pub const fn new(order: WordOrder) -> Self {
        Self {
            out: [0; BYTES_PER_BATCH],
            words: 0,
            acc: 0,
            bits: 0,
            count: 0,
            order,
        }
    }

    /// Append a codeword
    ///
    /// Returns `true` once the batch is full; the caller must flush before
    /// pushing again. Pushing into a full batch is ignored.
    pub fn push(&mut self, codeword: Codeword) -> bool {
        if self.is_full() {
            return true;
        }

        let shift = 32 - CODEWORD_BITS - self.bits;
        self.acc |= (codeword.bits() as u32) << shift;
        self.bits += CODEWORD_BITS;
        self.count += 1;

        while self.bits >= 16 {
            let word = (self.acc >> 16) as u16;
            self.acc <<= 16;
            self.bits -= 16;
            self.emit(word);
        }

        self.is_full()
    }

    fn emit(&mut self, word: u16) {
        let at = self.words * 2;
        self.out[at..at + 2].copy_from_slice(&self.order.to_bytes(word));
        self.words += 1;
    }

    /// Append NOP codewords until no partial word is pending
    ///
    /// Returns the number of NOPs added (0..=15).
    pub fn pad_to_word_boundary(&mut self) -> usize {
        let mut added = 0;
        while self.count % WORD_ALIGNED_GROUP != 0 {
            self.push(NOP);
            added += 1;
        }
        added
    }

    /// Hand the packed words to `write` and reset the buffer
    ///
    /// A pending partial word is completed with NOPs first. `write` is not
    /// called for an empty buffer. The buffer is reset whether or not `write`
    /// succeeds.
    pub fn flush_with<E, F>(&mut self, write: F) -> Result<(), E>
    where
        F: FnOnce(&[u8]) -> Result<(), E>,
    {
        if self.is_empty() {
            return Ok(());
        }

        self.pad_to_word_boundary();
        let result = write(self.packed());
        self.clear();
        result
    }

    /// Drop everything pending
    pub fn clear(&mut self) {
        self.words = 0;
        self.acc = 0;
        self.bits = 0;
        self.count = 0;
    }

    /// Serialized complete words
    pub fn packed(&self) -> &[u8] {
        &self.out[..self.words * 2]
    }

    /// Codewords pushed since the last flush
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when nothing is pending
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True when the batch holds 1024 codewords
    pub fn is_full(&self) -> bool {
        self.count == CODEWORDS_PER_BATCH
    }

    /// Bits waiting for a complete word
    pub fn pending_bits(&self) -> u32 {
        self.bits
    }

    pub fn word_order(&self) -> WordOrder {
        self.order
    }

    /// Change the word order; takes effect from the next batch
    pub fn set_word_order(&mut self, order: WordOrder) {
        self.clear();
        self.order = order;
    }
}

impl Default for PackBuffer {
    fn default() -> Self {
        Self::new(WordOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unpack::{decode_bytes, Unpacker};
    use proptest::prelude::*;

    #[test]
    fn test_batch_constants() {
        assert_eq!(WORDS_PER_BATCH, 576);
        assert_eq!(BYTES_PER_BATCH, 1152);
    }

    #[test]
    fn test_two_codewords_pack_msb_first() {
        let mut buf = PackBuffer::new(WordOrder::BigEndian);
        buf.push(Codeword::data(0xFF));
        assert!(buf.packed().is_empty());
        assert_eq!(buf.pending_bits(), 9);

        buf.push(Codeword::command(0x00));
        // 1_1111_1111 0000000|00 -> 0xFF80, two bits left over
        assert_eq!(buf.packed(), &[0xFF, 0x80]);
        assert_eq!(buf.pending_bits(), 2);
    }

    #[test]
    fn test_little_endian_word_order() {
        let mut buf = PackBuffer::new(WordOrder::LittleEndian);
        buf.push(Codeword::data(0xFF));
        buf.push(Codeword::command(0x00));
        assert_eq!(buf.packed(), &[0x80, 0xFF]);
    }

    #[test]
    fn test_full_batch_is_576_words() {
        let mut buf = PackBuffer::default();
        for i in 0..CODEWORDS_PER_BATCH - 1 {
            assert!(!buf.push(Codeword::data(i as u8)));
        }
        assert!(buf.push(Codeword::data(0x55)));
        assert!(buf.is_full());
        assert_eq!(buf.pending_bits(), 0);
        assert_eq!(buf.packed().len(), BYTES_PER_BATCH);
    }

    #[test]
    fn test_push_into_full_batch_is_ignored() {
        let mut buf = PackBuffer::default();
        for _ in 0..CODEWORDS_PER_BATCH {
            buf.push(Codeword::data(0xAA));
        }
        assert!(buf.push(Codeword::data(0x00)));
        assert_eq!(buf.len(), CODEWORDS_PER_BATCH);
        assert_eq!(buf.packed().len(), BYTES_PER_BATCH);
    }

    #[test]
    fn test_pad_to_word_boundary() {
        let mut buf = PackBuffer::default();
        buf.push(Codeword::command(0x2C));
        assert_eq!(buf.pad_to_word_boundary(), 15);
        assert_eq!(buf.len(), 16);
        assert_eq!(buf.pending_bits(), 0);
        assert_eq!(buf.packed().len(), 18);

        // Already aligned
        assert_eq!(buf.pad_to_word_boundary(), 0);
    }

    #[test]
    fn test_flush_with_resets_on_success() {
        let mut buf = PackBuffer::default();
        buf.push(Codeword::command(0x29));

        let mut sent = 0;
        let result: Result<(), ()> = buf.flush_with(|bytes| {
            sent = bytes.len();
            Ok(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(sent, 18); // padded to 16 codewords = 9 words
        assert!(buf.is_empty());
        assert!(buf.packed().is_empty());
    }

    #[test]
    fn test_flush_with_resets_on_error() {
        let mut buf = PackBuffer::default();
        for _ in 0..100 {
            buf.push(Codeword::data(0x12));
        }

        let result = buf.flush_with(|_| Err("bus fault"));
        assert_eq!(result, Err("bus fault"));
        assert!(buf.is_empty());
        assert_eq!(buf.pending_bits(), 0);

        // The next batch counts from zero
        buf.push(Codeword::data(0xFF));
        buf.push(Codeword::command(0x00));
        assert_eq!(buf.packed(), &[0xFF, 0x80]);
    }

    #[test]
    fn test_flush_with_skips_empty_buffer() {
        let mut buf = PackBuffer::default();
        let mut called = false;
        let result: Result<(), ()> = buf.flush_with(|_| {
            called = true;
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert!(!called);
    }

    #[test]
    fn test_set_word_order_clears_pending() {
        let mut buf = PackBuffer::new(WordOrder::BigEndian);
        buf.push(Codeword::data(0x01));
        buf.set_word_order(WordOrder::LittleEndian);
        assert!(buf.is_empty());
        assert_eq!(buf.word_order(), WordOrder::LittleEndian);
    }

    fn codeword_strategy() -> impl Strategy<Value = Codeword> {
        (any::<bool>(), any::<u8>()).prop_map(|(is_data, byte)| {
            if is_data {
                Codeword::data(byte)
            } else {
                Codeword::command(byte)
            }
        })
    }

    fn word_order_strategy() -> impl Strategy<Value = WordOrder> {
        prop_oneof![Just(WordOrder::BigEndian), Just(WordOrder::LittleEndian)]
    }

    proptest! {
        #[test]
        fn test_unpack_returns_push_order(
            codewords in proptest::collection::vec(codeword_strategy(), 1..=CODEWORDS_PER_BATCH),
            order in word_order_strategy(),
        ) {
            let mut buf = PackBuffer::new(order);
            for &cw in &codewords {
                buf.push(cw);
            }
            let padding = buf.pad_to_word_boundary();

            prop_assert_eq!(buf.packed().len(), (codewords.len() + padding) * 9 / 8);

            let decoded: Vec<Codeword> =
                Unpacker::new(decode_bytes(buf.packed(), order)).collect();
            prop_assert_eq!(decoded.len(), codewords.len() + padding);
            prop_assert_eq!(&decoded[..codewords.len()], &codewords[..]);
            prop_assert!(decoded[codewords.len()..].iter().all(|&cw| cw == NOP));
        }

        #[test]
        fn test_output_words_track_input_count(count in 0usize..=CODEWORDS_PER_BATCH) {
            let mut buf = PackBuffer::default();
            for _ in 0..count {
                buf.push(Codeword::data(0xA5));
            }
            prop_assert_eq!(buf.packed().len() / 2, count * 9 / 16);
        }
    }
}
