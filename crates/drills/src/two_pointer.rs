//! Single-scan counting over binary strings.

use crate::bits::parse_bits;
use crate::error::{DrillError, Result};

/// Count substrings with equal, grouped runs of `0`s and `1`s (e.g. `"0011"`, `"10"`).
///
/// Each pair of adjacent runs contributes `min(len_a, len_b)`.
pub fn count_binary_substrings(s: &str) -> Result<usize> {
    let bits = parse_bits(s)?;
    let mut runs: Vec<usize> = Vec::new();
    let mut len = 0;
    for (i, &d) in bits.iter().enumerate() {
        if i > 0 && bits[i - 1] != d {
            runs.push(len);
            len = 0;
        }
        len += 1;
    }
    if len > 0 {
        runs.push(len);
    }
    Ok(runs.windows(2).map(|w| w[0].min(w[1])).sum())
}

/// Best `zeros(left) + ones(right)` over splits with both parts non-empty.
pub fn max_score(s: &str) -> Result<usize> {
    let bits = parse_bits(s)?;
    if bits.len() < 2 {
        return Err(DrillError::invalid(format!(
            "need at least two digits to split, got {}",
            bits.len()
        )));
    }
    let total_ones = bits.iter().filter(|&&d| d == 1).count();
    let (mut zeros, mut ones, mut best) = (0, 0, 0);
    for &d in &bits[..bits.len() - 1] {
        if d == 0 {
            zeros += 1;
        } else {
            ones += 1;
        }
        best = best.max(zeros + total_ones - ones);
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn count_bs_samples() {
        assert_eq!(count_binary_substrings("00110011").unwrap(), 6);
        assert_eq!(count_binary_substrings("10101").unwrap(), 4);
        assert_eq!(count_binary_substrings("000").unwrap(), 0);
        assert_eq!(count_binary_substrings("").unwrap(), 0);
        assert!(count_binary_substrings("0a1").is_err());
    }

    #[test]
    fn max_score_samples() {
        assert_eq!(max_score("011101").unwrap(), 5);
        assert_eq!(max_score("00111").unwrap(), 5);
        assert_eq!(max_score("1111").unwrap(), 3);
        assert_eq!(max_score("10").unwrap(), 0);
        assert!(matches!(max_score("1"), Err(DrillError::InvalidInput { .. })));
    }

    proptest! {
        #[test]
        fn max_score_matches_every_split(s in "[01]{2,30}") {
            let b = s.as_bytes();
            let brute = (1..b.len())
                .map(|i| {
                    b[..i].iter().filter(|&&c| c == b'0').count()
                        + b[i..].iter().filter(|&&c| c == b'1').count()
                })
                .max()
                .unwrap();
            let got = max_score(&s).unwrap();
            prop_assert_eq!(got, brute);
            prop_assert!(got <= s.len() - 1);
        }

        #[test]
        fn count_bs_matches_substring_scan(s in "[01]{0,24}") {
            let b = s.as_bytes();
            let mut brute = 0;
            for i in 0..b.len() {
                for j in (i + 2..=b.len()).step_by(2) {
                    let sub = &b[i..j];
                    let half = sub.len() / 2;
                    let grouped = sub[..half].iter().all(|&c| c == sub[0])
                        && sub[half..].iter().all(|&c| c == sub[half])
                        && sub[0] != sub[half];
                    if grouped {
                        brute += 1;
                    }
                }
            }
            prop_assert_eq!(count_binary_substrings(&s).unwrap(), brute);
        }
    }
}
