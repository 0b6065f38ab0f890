//! Bit-string parsing and result rendering for drivers.
//!
//! The core never sees raw text: a driver validates user input here and hands
//! the adders pre-checked [`Level`] slices. Text is written MSB first (as a
//! human reads a binary number); adders take and return bits LSB first.

use crate::error::{Error, Result};
use crate::level::Level;

/// Parses a bit string of exactly `width` characters into levels, LSB first.
///
/// Fails with [`Error::InvalidWidth`] on a wrong length and
/// [`Error::InvalidBit`] on any character other than '0' or '1'.
pub fn parse_bits(text: &str, width: usize) -> Result<Vec<Level>> {
    let count = text.chars().count();
    if count != width {
        return Err(Error::InvalidWidth {
            expected: width,
            actual: count,
        });
    }
    text.chars()
        .rev()
        .map(|c| Level::from_bit(c).ok_or(Error::InvalidBit(c)))
        .collect()
}

/// Renders sum bits (LSB first) plus the carry-out as an MSB-first string.
pub fn render_sum(sum: &[Level], carry: Level) -> String {
    let mut out = String::with_capacity(sum.len() + 1);
    out.push(carry.as_char());
    for &bit in sum.iter().rev() {
        out.push(bit.as_char());
    }
    out
}

/// Renders LSB-first bits as an MSB-first string, without a carry column.
pub fn render_bits(bits: &[Level]) -> String {
    bits.iter().rev().map(|bit| bit.as_char()).collect()
}

/// Interprets LSB-first bits as an integer; `None` if any bit is `Undefined`.
pub fn bits_value(bits: &[Level]) -> Option<u64> {
    let mut value = 0u64;
    for (i, bit) in bits.iter().enumerate() {
        if bit.to_bool()? {
            value |= 1 << i;
        }
    }
    Some(value)
}

/// Encodes the low `width` bits of `value` as levels, LSB first.
pub fn bits_from_value(value: u64, width: usize) -> Vec<Level> {
    (0..width).map(|i| Level::from(value >> i & 1 == 1)).collect()
}
