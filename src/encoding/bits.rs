//! Conversion between a byte and its 8-symbol bit group.

use crate::encoding::alphabet::{bit_char, BIT_ONE};
use crate::error::{Error, Result};

/// Number of bit-symbols in one bit group.
pub const GROUP_LEN: usize = 8;

/// Convert a byte into its bit group, most significant bit first.
///
/// # Example
///
/// ```
/// use nullwidth::encoding::{byte_to_bits, BIT_ONE, BIT_ZERO};
///
/// // 'a' = 0x61 = 0b0110_0001
/// let group = byte_to_bits(b'a');
/// assert_eq!(group[0], BIT_ZERO);
/// assert_eq!(group[1], BIT_ONE);
/// assert_eq!(group[7], BIT_ONE);
/// ```
pub fn byte_to_bits(b: u8) -> [char; GROUP_LEN] {
    let mut group = [bit_char(false); GROUP_LEN];
    for (i, slot) in group.iter_mut().enumerate() {
        *slot = bit_char((b >> (7 - i)) & 1 == 1);
    }
    group
}

/// Reconstruct a byte from a bit group.
///
/// Any symbol equal to [`BIT_ONE`] sets its bit; every other symbol,
/// filler included, leaves it clear.
///
/// # Errors
///
/// Returns [`Error::InvalidBitGroup`] when `group` is not exactly 8 symbols long.
pub fn bits_to_byte(group: &[char]) -> Result<u8> {
    let group: &[char; GROUP_LEN] = group
        .try_into()
        .map_err(|_| Error::InvalidBitGroup { len: group.len() })?;
    Ok(pack_group(group))
}

/// Infallible form of [`bits_to_byte`] for callers that already hold a full group.
pub fn pack_group(group: &[char; GROUP_LEN]) -> u8 {
    group
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == BIT_ONE)
        .fold(0u8, |acc, (i, _)| acc | (1 << (7 - i)))
}
