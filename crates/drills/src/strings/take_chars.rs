//! Fewest characters taken from the two ends so that at least `k` of each of
//! `'a'`, `'b'`, `'c'` are collected.
//!
//! Feasibility is monotone in the number taken, so the answer is found by
//! binary search over that number. A candidate `t` is checked by sliding a
//! frequency window over every split of `t` into a left prefix and a right
//! suffix.

use crate::error::{DrillError, Result};

/// `Ok(None)` when even the whole string lacks `k` of some symbol.
pub fn take_characters(s: &str, k: usize) -> Result<Option<usize>> {
    let symbols = s
        .bytes()
        .map(|b| match b {
            b'a'..=b'c' => Ok(usize::from(b - b'a')),
            _ => Err(DrillError::invalid(format!(
                "expected only 'a', 'b', 'c', found {:?}",
                char::from(b)
            ))),
        })
        .collect::<Result<Vec<usize>>>()?;

    let (mut lo, mut hi) = (0, symbols.len());
    let mut best = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let ok = can_take(&symbols, k, mid);
        tracing::debug!(mid, ok, "take_characters probe");
        if ok {
            best = Some(mid);
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
    }
    Ok(best)
}

/// Can some `target` characters, split between the two ends, cover `k` of each symbol?
fn can_take(symbols: &[usize], k: usize, target: usize) -> bool {
    let n = symbols.len();
    let mut freq = [0usize; 3];
    for &c in &symbols[..target] {
        freq[c] += 1;
    }
    if satisfied(&freq, k) {
        return true;
    }
    // move one character at a time from the left prefix to the right suffix
    for shift in 1..=target {
        freq[symbols[target - shift]] -= 1;
        freq[symbols[n - shift]] += 1;
        if satisfied(&freq, k) {
            return true;
        }
    }
    false
}

#[inline]
fn satisfied(freq: &[usize; 3], k: usize) -> bool {
    freq.iter().all(|&f| f >= k)
}
