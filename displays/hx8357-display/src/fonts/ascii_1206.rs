//! 6×12 ASCII font
//!
//! One byte per row, bit 0 is the leftmost pixel. Glyphs sit in columns
//! 0-4 and rows 2-8 of the cell.

use hx8357_core::font::{AsciiFont, PRINTABLE_COUNT};

#[rustfmt::skip]
static ROWS: [u8; PRINTABLE_COUNT * 12] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00, 0x00, 0x00, // '!'
    0x00, 0x00, 0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x00, 0x00, 0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00, 0x00, 0x00, // '#'
    0x00, 0x00, 0x04, 0x1E, 0x05, 0x0E, 0x14, 0x0F, 0x04, 0x00, 0x00, 0x00, // '$'
    0x00, 0x00, 0x03, 0x13, 0x08, 0x04, 0x02, 0x19, 0x18, 0x00, 0x00, 0x00, // '%'
    0x00, 0x00, 0x02, 0x05, 0x05, 0x02, 0x15, 0x09, 0x16, 0x00, 0x00, 0x00, // '&'
    0x00, 0x00, 0x06, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x00, 0x00, 0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, // '('
    0x00, 0x00, 0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00, 0x00, 0x00, // ')'
    0x00, 0x00, 0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00, 0x00, 0x00, 0x00, // '*'
    0x00, 0x00, 0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x04, 0x02, 0x00, 0x00, 0x00, // ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x06, 0x00, 0x00, 0x00, // '.'
    0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00, // '/'
    0x00, 0x00, 0x0E, 0x11, 0x19, 0x15, 0x13, 0x11, 0x0E, 0x00, 0x00, 0x00, // '0'
    0x00, 0x00, 0x04, 0x06, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00, 0x00, 0x00, // '1'
    0x00, 0x00, 0x0E, 0x11, 0x10, 0x08, 0x04, 0x02, 0x1F, 0x00, 0x00, 0x00, // '2'
    0x00, 0x00, 0x1F, 0x08, 0x04, 0x08, 0x10, 0x11, 0x0E, 0x00, 0x00, 0x00, // '3'
    0x00, 0x00, 0x08, 0x0C, 0x0A, 0x09, 0x1F, 0x08, 0x08, 0x00, 0x00, 0x00, // '4'
    0x00, 0x00, 0x1F, 0x01, 0x0F, 0x10, 0x10, 0x11, 0x0E, 0x00, 0x00, 0x00, // '5'
    0x00, 0x00, 0x0C, 0x02, 0x01, 0x0F, 0x11, 0x11, 0x0E, 0x00, 0x00, 0x00, // '6'
    0x00, 0x00, 0x1F, 0x10, 0x08, 0x04, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, // '7'
    0x00, 0x00, 0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00, 0x00, 0x00, // '8'
    0x00, 0x00, 0x0E, 0x11, 0x11, 0x1E, 0x10, 0x08, 0x06, 0x00, 0x00, 0x00, // '9'
    0x00, 0x00, 0x00, 0x06, 0x06, 0x00, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, // ':'
    0x00, 0x00, 0x00, 0x06, 0x06, 0x00, 0x06, 0x04, 0x02, 0x00, 0x00, 0x00, // ';'
    0x00, 0x00, 0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, // '<'
    0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, // '='
    0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00, 0x00, 0x00, // '>'
    0x00, 0x00, 0x0E, 0x11, 0x10, 0x08, 0x04, 0x00, 0x04, 0x00, 0x00, 0x00, // '?'
    0x00, 0x00, 0x0E, 0x11, 0x10, 0x16, 0x15, 0x15, 0x0E, 0x00, 0x00, 0x00, // '@'
    0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00, 0x00, 0x00, // 'A'
    0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x11, 0x11, 0x0F, 0x00, 0x00, 0x00, // 'B'
    0x00, 0x00, 0x0E, 0x11, 0x01, 0x01, 0x01, 0x11, 0x0E, 0x00, 0x00, 0x00, // 'C'
    0x00, 0x00, 0x07, 0x09, 0x11, 0x11, 0x11, 0x09, 0x07, 0x00, 0x00, 0x00, // 'D'
    0x00, 0x00, 0x1F, 0x01, 0x01, 0x0F, 0x01, 0x01, 0x1F, 0x00, 0x00, 0x00, // 'E'
    0x00, 0x00, 0x1F, 0x01, 0x01, 0x0F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, // 'F'
    0x00, 0x00, 0x0E, 0x11, 0x01, 0x1D, 0x11, 0x11, 0x1E, 0x00, 0x00, 0x00, // 'G'
    0x00, 0x00, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00, 0x00, 0x00, // 'H'
    0x00, 0x00, 0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00, 0x00, 0x00, // 'I'
    0x00, 0x00, 0x1C, 0x08, 0x08, 0x08, 0x08, 0x09, 0x06, 0x00, 0x00, 0x00, // 'J'
    0x00, 0x00, 0x11, 0x09, 0x05, 0x03, 0x05, 0x09, 0x11, 0x00, 0x00, 0x00, // 'K'
    0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1F, 0x00, 0x00, 0x00, // 'L'
    0x00, 0x00, 0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00, 0x00, 0x00, // 'M'
    0x00, 0x00, 0x11, 0x11, 0x13, 0x15, 0x19, 0x11, 0x11, 0x00, 0x00, 0x00, // 'N'
    0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00, 0x00, 0x00, // 'O'
    0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, // 'P'
    0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x15, 0x09, 0x16, 0x00, 0x00, 0x00, // 'Q'
    0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x05, 0x09, 0x11, 0x00, 0x00, 0x00, // 'R'
    0x00, 0x00, 0x1E, 0x01, 0x01, 0x0E, 0x10, 0x10, 0x0F, 0x00, 0x00, 0x00, // 'S'
    0x00, 0x00, 0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, // 'T'
    0x00, 0x00, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00, 0x00, 0x00, // 'U'
    0x00, 0x00, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00, 0x00, 0x00, // 'V'
    0x00, 0x00, 0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A, 0x00, 0x00, 0x00, // 'W'
    0x00, 0x00, 0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00, 0x00, 0x00, // 'X'
    0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, // 'Y'
    0x00, 0x00, 0x1F, 0x10, 0x08, 0x04, 0x02, 0x01, 0x1F, 0x00, 0x00, 0x00, // 'Z'
    0x00, 0x00, 0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E, 0x00, 0x00, 0x00, // '['
    0x00, 0x00, 0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, // '\\'
    0x00, 0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00, 0x00, 0x00, // ']'
    0x00, 0x00, 0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, // '_'
    0x00, 0x00, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x10, 0x1E, 0x11, 0x1E, 0x00, 0x00, 0x00, // 'a'
    0x00, 0x00, 0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x00, 0x00, 0x00, // 'b'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x01, 0x01, 0x11, 0x0E, 0x00, 0x00, 0x00, // 'c'
    0x00, 0x00, 0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x00, 0x00, 0x00, // 'd'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x11, 0x1F, 0x01, 0x0E, 0x00, 0x00, 0x00, // 'e'
    0x00, 0x00, 0x0C, 0x12, 0x02, 0x07, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, // 'f'
    0x00, 0x00, 0x00, 0x1E, 0x11, 0x11, 0x1E, 0x10, 0x0E, 0x00, 0x00, 0x00, // 'g'
    0x00, 0x00, 0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x11, 0x00, 0x00, 0x00, // 'h'
    0x00, 0x00, 0x04, 0x00, 0x06, 0x04, 0x04, 0x04, 0x0E, 0x00, 0x00, 0x00, // 'i'
    0x00, 0x00, 0x08, 0x00, 0x0C, 0x08, 0x08, 0x09, 0x06, 0x00, 0x00, 0x00, // 'j'
    0x00, 0x00, 0x01, 0x01, 0x09, 0x05, 0x03, 0x05, 0x09, 0x00, 0x00, 0x00, // 'k'
    0x00, 0x00, 0x06, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00, 0x00, 0x00, // 'l'
    0x00, 0x00, 0x00, 0x00, 0x0B, 0x15, 0x15, 0x11, 0x11, 0x00, 0x00, 0x00, // 'm'
    0x00, 0x00, 0x00, 0x00, 0x0D, 0x13, 0x11, 0x11, 0x11, 0x00, 0x00, 0x00, // 'n'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00, 0x00, 0x00, // 'o'
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x11, 0x0F, 0x01, 0x01, 0x00, 0x00, 0x00, // 'p'
    0x00, 0x00, 0x00, 0x00, 0x16, 0x19, 0x1E, 0x10, 0x10, 0x00, 0x00, 0x00, // 'q'
    0x00, 0x00, 0x00, 0x00, 0x0D, 0x13, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, // 'r'
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x01, 0x0E, 0x10, 0x0F, 0x00, 0x00, 0x00, // 's'
    0x00, 0x00, 0x02, 0x02, 0x07, 0x02, 0x02, 0x12, 0x0C, 0x00, 0x00, 0x00, // 't'
    0x00, 0x00, 0x00, 0x00, 0x11, 0x11, 0x11, 0x19, 0x16, 0x00, 0x00, 0x00, // 'u'
    0x00, 0x00, 0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00, 0x00, 0x00, // 'v'
    0x00, 0x00, 0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00, 0x00, 0x00, // 'w'
    0x00, 0x00, 0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, // 'x'
    0x00, 0x00, 0x00, 0x00, 0x11, 0x11, 0x1E, 0x10, 0x0E, 0x00, 0x00, 0x00, // 'y'
    0x00, 0x00, 0x00, 0x00, 0x1F, 0x08, 0x04, 0x02, 0x1F, 0x00, 0x00, 0x00, // 'z'
    0x00, 0x00, 0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00, 0x00, 0x00, // '{'
    0x00, 0x00, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, // '|'
    0x00, 0x00, 0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00, 0x00, 0x00, // '}'
    0x00, 0x00, 0x02, 0x15, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '~'
];

pub static ASCII_1206: AsciiFont = AsciiFont::new(6, 12, &ROWS);
