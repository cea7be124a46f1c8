//! HX8357 3-wire serial protocol
//!
//! In its 3-wire serial mode the HX8357B clocks in 9-bit units: a D/C bit
//! followed by the command or parameter byte, MSB first. SPI masters that
//! shift whole 16-bit words can still produce that stream by packing the
//! codewords back to back:
//!
//! ```text
//!  codeword n        codeword n+1       codeword n+2
//! ┌──┬────────┐     ┌──┬────────┐     ┌──┬────────┐
//! │DC│ D7..D0 │     │DC│ D7..D0 │     │DC│ D7..D0 │ ...
//! └──┴────────┘     └──┴────────┘     └──┴────────┘
//!  \___________ 16 bits ___________/\_______ 16 bits ...
//! ```
//!
//! Sixteen codewords fill exactly nine 16-bit words, so a batch of 1024
//! codewords is 576 words (1152 bytes) with no leftover bits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod codeword;
pub mod pack;
pub mod unpack;

pub use codeword::{Codeword, NOP};
pub use pack::{
    PackBuffer, WordOrder, BYTES_PER_BATCH, CODEWORDS_PER_BATCH, WORDS_PER_BATCH,
};
pub use unpack::{decode_bytes, Unpacker};
