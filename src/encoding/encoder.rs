//! Byte string to invisible payload.

use crate::encoding::bits::{byte_to_bits, GROUP_LEN};

/// Encode bytes into a payload of bit-symbols.
///
/// The output holds exactly `8 * data.len()` code points, one bit group per
/// byte in input order. Empty input yields an empty payload.
///
/// # Example
///
/// ```
/// use nullwidth::encoding::encode;
///
/// let payload = encode(b"hi");
/// assert_eq!(payload.chars().count(), 16);
/// assert!(encode(b"").is_empty());
/// ```
pub fn encode(data: &[u8]) -> String {
    // Every bit-symbol is 3 bytes of UTF-8.
    let mut payload = String::with_capacity(data.len() * GROUP_LEN * 3);
    for &b in data {
        payload.extend(byte_to_bits(b));
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::alphabet::{Symbol, BIT_ONE, BIT_ZERO};

    #[test]
    fn test_encode_single_byte() {
        let expected: String = [
            BIT_ZERO, BIT_ONE, BIT_ONE, BIT_ZERO, BIT_ZERO, BIT_ZERO, BIT_ZERO, BIT_ONE,
        ]
        .iter()
        .collect();

        assert_eq!(encode(b"a"), expected);
    }

    #[test]
    fn test_encode_empty_data() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_encode_emits_complete_groups() {
        let data: Vec<u8> = (0..300).map(|i| (i % 256) as u8).collect();
        let payload = encode(&data);

        assert_eq!(payload.chars().count(), data.len() * GROUP_LEN);
        assert!(payload.chars().all(|c| Symbol::classify(c).is_bit()));
    }

    #[test]
    fn test_encode_preserves_byte_order() {
        let payload = encode(&[0x00, 0xFF]);
        let chars: Vec<char> = payload.chars().collect();

        assert!(chars[..8].iter().all(|&c| c == BIT_ZERO));
        assert!(chars[8..].iter().all(|&c| c == BIT_ONE));
    }
}
