//! Rabin–Karp substring search.
//!
//! Model
//! - The window at offset `i` hashes as `Σ text[i+j] · base^(i+j) mod modulus`.
//!   Rather than dividing out `base^i` when the window slides, the pattern hash
//!   is scaled by `base` at every step so both sides carry the same weights.
//! - Equal hashes are confirmed byte-by-byte before a match is reported.
//!
//! Offsets are byte offsets into `text`.

use std::iter::FusedIterator;

/// Rolling-hash parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashCfg {
    pub base: u64,
    /// A zero modulus is treated as 1: every window collides and is verified.
    pub modulus: u64,
}

impl Default for HashCfg {
    fn default() -> Self {
        Self {
            base: 7,
            modulus: 101,
        }
    }
}

/// All offsets of `pattern` in `text`, ascending, with the default hash.
pub fn search<'a>(pattern: &'a str, text: &'a str) -> Matches<'a> {
    search_with(pattern, text, HashCfg::default())
}

/// Same as [`search`] with explicit hash parameters.
pub fn search_with<'a>(pattern: &'a str, text: &'a str, cfg: HashCfg) -> Matches<'a> {
    Matches::new(pattern.as_bytes(), text.as_bytes(), cfg)
}

/// Lazy iterator over match offsets. Clone it to restart from the current window.
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    pat: &'a [u8],
    text: &'a [u8],
    base: u64,
    modulus: u64,
    pos: usize,
    hash_pat: u64,
    hash_text: u64,
    // base^pos and base^(pos + pat.len())
    w_left: u64,
    w_right: u64,
    done: bool,
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) + u128::from(b)) % u128::from(m)) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

impl<'a> Matches<'a> {
    fn new(pat: &'a [u8], text: &'a [u8], cfg: HashCfg) -> Self {
        let modulus = cfg.modulus.max(1);
        let base = cfg.base % modulus;
        let mut m = Self {
            pat,
            text,
            base,
            modulus,
            pos: 0,
            hash_pat: 0,
            hash_text: 0,
            w_left: 1 % modulus,
            w_right: 1 % modulus,
            done: pat.is_empty() || pat.len() > text.len(),
        };
        if !m.done {
            for (&p, &t) in pat.iter().zip(text.iter()) {
                m.hash_pat = add_mod(m.hash_pat, m.weigh(p, m.w_right), modulus);
                m.hash_text = add_mod(m.hash_text, m.weigh(t, m.w_right), modulus);
                m.w_right = mul_mod(m.w_right, base, modulus);
            }
        }
        m
    }

    #[inline]
    fn weigh(&self, byte: u8, weight: u64) -> u64 {
        mul_mod(u64::from(byte), weight, self.modulus)
    }

    /// Slide the window from `pos` to `pos + 1`.
    fn roll(&mut self) {
        let m = self.modulus;
        let outgoing = self.weigh(self.text[self.pos], self.w_left);
        let incoming = self.weigh(self.text[self.pos + self.pat.len()], self.w_right);
        self.hash_text = add_mod(self.hash_text, m - outgoing, m);
        self.hash_text = add_mod(self.hash_text, incoming, m);
        self.hash_pat = mul_mod(self.hash_pat, self.base, m);
        self.w_left = mul_mod(self.w_left, self.base, m);
        self.w_right = mul_mod(self.w_right, self.base, m);
        self.pos += 1;
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let n = self.pat.len();
        while !self.done {
            let i = self.pos;
            let mut hit = false;
            if self.hash_pat == self.hash_text {
                hit = &self.text[i..i + n] == self.pat;
                if !hit {
                    tracing::trace!(offset = i, "hash collision rejected");
                }
            }
            if i + n < self.text.len() {
                self.roll();
            } else {
                self.done = true;
            }
            if hit {
                return Some(i);
            }
        }
        None
    }
}

impl FusedIterator for Matches<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive(pattern: &str, text: &str) -> Vec<usize> {
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }
        (0..=text.len() - pattern.len())
            .filter(|&i| &text.as_bytes()[i..i + pattern.len()] == pattern.as_bytes())
            .collect()
    }

    #[test]
    fn finds_every_occurrence() {
        let hits: Vec<usize> = search("geek", "geeksforgeeks").collect();
        assert_eq!(hits, vec![0, 8]);
        assert_eq!(search("a", "aaa").collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(search("aa", "aaaa").collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn empty_results() {
        assert_eq!(search("longer", "short").count(), 0);
        assert_eq!(search("", "abc").count(), 0);
        assert_eq!(search("x", "").count(), 0);
        assert_eq!(search("zz", "abcabc").count(), 0);
    }

    #[test]
    fn lazy_and_restartable() {
        let mut it = search("ab", "ababab");
        assert_eq!(it.next(), Some(0));
        let rest = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(rest.collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(search("ab", "ababab").count(), 3);
    }

    #[test]
    fn degenerate_modulus_still_exact() {
        let cfg = HashCfg {
            base: 3,
            modulus: 1,
        };
        let hits: Vec<usize> = search_with("ab", "xabyab", cfg).collect();
        assert_eq!(hits, vec![1, 4]);
        let zero = HashCfg {
            base: 3,
            modulus: 0,
        };
        assert_eq!(search_with("b", "abb", zero).collect::<Vec<_>>(), vec![1, 2]);
    }

    proptest! {
        #[test]
        fn agrees_with_naive_scan(text in "[ab]{0,40}", pattern in "[ab]{1,4}") {
            let got: Vec<usize> = search(&pattern, &text).collect();
            prop_assert_eq!(got, naive(&pattern, &text));
        }
    }
}
