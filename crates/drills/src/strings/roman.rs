//! Roman numerals via the 13-symbol subtractive table.

use crate::error::{DrillError, Result};

/// Largest value the standard symbol set writes without overlines.
pub const MAX_ROMAN: u32 = 3999;

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Greedy conversion, no domain check: `0` gives `""`, `4000` gives `"MMMM"`.
pub fn int_to_roman(num: u32) -> String {
    let mut num = num;
    let mut out = String::new();
    for &(value, symbol) in TABLE.iter() {
        if num == 0 {
            break;
        }
        let count = num / value;
        out.push_str(&symbol.repeat(count as usize));
        num -= value * count;
    }
    out
}

/// Like [`int_to_roman`] but rejects values outside `1..=3999`.
pub fn try_int_to_roman(num: u32) -> Result<String> {
    if !(1..=MAX_ROMAN).contains(&num) {
        return Err(DrillError::out_of_range(
            i64::from(num),
            1,
            i64::from(MAX_ROMAN),
        ));
    }
    Ok(int_to_roman(num))
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Right-to-left scan: add a symbol unless it is smaller than its right neighbour.
///
/// Only the alphabet is checked. Non-canonical numerals such as `"IIII"` are
/// evaluated as written.
pub fn roman_to_int(s: &str) -> Result<u32> {
    let values = s
        .chars()
        .map(|c| {
            symbol_value(c).ok_or_else(|| DrillError::invalid(format!("unknown Roman symbol {c:?}")))
        })
        .collect::<Result<Vec<u32>>>()?;
    let (&last, rest) = values
        .split_last()
        .ok_or_else(|| DrillError::invalid("empty numeral"))?;
    let mut total = i64::from(last);
    let mut next = last;
    for &cur in rest.iter().rev() {
        if cur >= next {
            total += i64::from(cur);
        } else {
            total -= i64::from(cur);
        }
        next = cur;
    }
    u32::try_from(total).map_err(|_| DrillError::invalid(format!("numeral {s:?} evaluates below zero")))
}
