//! Binary-digit strings.

use crate::error::{DrillError, Result};

/// Parse a most-significant-first string of `'0'`/`'1'` into digit values.
pub(crate) fn parse_bits(s: &str) -> Result<Vec<u8>> {
    s.bytes()
        .map(|b| match b {
            b'0' | b'1' => Ok(b - b'0'),
            _ => Err(DrillError::invalid(format!(
                "expected a binary digit, found {:?}",
                char::from(b)
            ))),
        })
        .collect()
}

/// Sum of two binary strings, most significant digit first.
///
/// The result is as long as the longer operand, plus one leading `'1'` when a
/// final carry remains. Leading zeros already in the longer operand are kept.
pub fn add_binary(a: &str, b: &str) -> Result<String> {
    let a = parse_bits(a)?;
    let b = parse_bits(b)?;
    let (long, short) = if b.len() > a.len() { (b, a) } else { (a, b) };

    let mut carry = 0u8;
    let mut rev = Vec::with_capacity(long.len() + 1);
    let mut rhs = short.iter().rev();
    for &d1 in long.iter().rev() {
        let d2 = rhs.next().copied().unwrap_or(0);
        let sum = carry + d1 + d2;
        rev.push(sum % 2);
        carry = sum / 2;
    }
    if carry != 0 {
        rev.push(1);
    }
    Ok(rev.iter().rev().map(|&d| char::from(b'0' + d)).collect())
}
