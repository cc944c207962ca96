//! Invisible payload back to a byte string.

use crate::encoding::alphabet::Symbol;
use crate::encoding::bits::{pack_group, GROUP_LEN};
use log::debug;

/// Outcome of decoding, with counters describing what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Recovered bytes.
    pub bytes: Vec<u8>,
    /// Bit-symbols consumed, including any dropped trailing bits.
    pub bit_symbols: usize,
    /// Code points that were not bit-symbols and were skipped.
    pub ignored: usize,
    /// Trailing bit-symbols discarded because they did not fill a group.
    pub dropped_bits: usize,
}

impl Decoded {
    /// Render the recovered bytes as text, replacing invalid UTF-8.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Decode bit-symbols found anywhere in `text`, reporting what was skipped.
///
/// Code points other than the two bit-symbols are skipped without
/// interrupting the current group. An incomplete trailing group is dropped.
pub fn decode_with_stats(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    let mut group = [char::default(); GROUP_LEN];
    let mut filled = 0usize;

    for c in text.chars() {
        if !Symbol::classify(c).is_bit() {
            decoded.ignored += 1;
            continue;
        }

        decoded.bit_symbols += 1;
        group[filled] = c;
        filled += 1;

        if filled == GROUP_LEN {
            decoded.bytes.push(pack_group(&group));
            filled = 0;
        }
    }

    if filled > 0 {
        debug!("Dropping {} trailing bit-symbols of an incomplete group", filled);
    }
    decoded.dropped_bits = filled;

    decoded
}

/// Decode bit-symbols found anywhere in `text` into bytes.
///
/// # Example
///
/// ```
/// use nullwidth::encoding::{decode, encode};
///
/// let payload = encode(b"ls -la");
/// assert_eq!(decode(&payload), b"ls -la");
///
/// // Visible text between bit-symbols is ignored.
/// let noisy: String = payload.chars().flat_map(|c| [c, 'x']).collect();
/// assert_eq!(decode(&noisy), b"ls -la");
/// ```
pub fn decode(text: &str) -> Vec<u8> {
    decode_with_stats(text).bytes
}

/// Decode bit-symbols found anywhere in `text` into a string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn decode_to_string(text: &str) -> String {
    decode_with_stats(text).to_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::alphabet::{BIT_ONE, BIT_ZERO, END_MARKER, FILLER, START_MARKER};
    use crate::encoding::encode;

    #[test]
    fn test_decode_all_bytes() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&data)), data);
    }

    #[test]
    fn test_decode_empty() {
        let decoded = decode_with_stats("");

        assert!(decoded.bytes.is_empty());
        assert_eq!(decoded.bit_symbols, 0);
        assert_eq!(decoded.ignored, 0);
        assert_eq!(decode_to_string(""), "");
    }

    #[test]
    fn test_decode_skips_noise_between_bits() {
        let payload = encode(b"whoami");
        let noisy: String = payload
            .chars()
            .enumerate()
            .flat_map(|(i, c)| match i % 4 {
                0 => vec![FILLER, c],
                1 => vec![c, START_MARKER, 'q'],
                2 => vec![END_MARKER, c, ' '],
                _ => vec![c],
            })
            .collect();

        let decoded = decode_with_stats(&noisy);
        assert_eq!(decoded.bytes, b"whoami");
        assert_eq!(decoded.bit_symbols, 48);
        assert_eq!(decoded.dropped_bits, 0);
        assert!(decoded.ignored > 0);
    }

    #[test]
    fn test_decode_drops_trailing_partial_group() {
        let mut payload = encode(b"ok");
        payload.extend([BIT_ONE, BIT_ZERO, BIT_ONE]);

        let decoded = decode_with_stats(&payload);
        assert_eq!(decoded.bytes, b"ok");
        assert_eq!(decoded.dropped_bits, 3);
    }

    #[test]
    fn test_decode_fewer_than_eight_bits_is_empty() {
        let seven: String = std::iter::repeat(BIT_ONE).take(7).collect();
        assert!(decode(&seven).is_empty());
        assert_eq!(decode_to_string(&seven), "");
    }

    #[test]
    fn test_decode_ignores_plain_text() {
        assert!(decode("no hidden data at all").is_empty());
    }

    #[test]
    fn test_decode_to_string_is_lossy() {
        let payload = encode(&[0x68, 0x69, 0xFF]);
        assert_eq!(decode_to_string(&payload), "hi\u{FFFD}");
    }
}
