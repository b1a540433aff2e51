//! String scanning drills.
//!
//! - `roman`: integer <-> Roman numeral conversion.
//! - `rabin_karp`: rolling-hash substring search, lazy over matches.
//! - `take_chars`: fewest characters taken from both ends to collect `k` of each of `a`, `b`, `c`.

pub mod rabin_karp;
pub mod roman;
pub mod take_chars;
