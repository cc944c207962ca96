//! Zero-width bit encoding.
//!
//! Each byte becomes a group of 8 invisible bit-symbols, most significant bit
//! first. Decoding picks bit-symbols out of arbitrary text and ignores
//! everything else, so payloads survive noise spliced between them.

mod alphabet;
mod bits;
mod decoder;
mod encoder;

pub use alphabet::{bit_char, Symbol, BIT_ONE, BIT_ZERO, END_MARKER, FILLER, START_MARKER};
pub use bits::{bits_to_byte, byte_to_bits, pack_group, GROUP_LEN};
pub use decoder::{decode, decode_to_string, decode_with_stats, Decoded};
pub use encoder::encode;
