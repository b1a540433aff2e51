//! Textbook algorithm drills.
//!
//! Each module is a leaf: no shared state, no I/O, one call in and one value
//! out. Sorting, string scanning, a grid DP, a cycle check and a binary tree.
//!
//! API Policy
//! - Functions over a restricted alphabet (`'0'/'1'`, Roman symbols, `'a'..='c'`)
//!   return `Result<_, DrillError>`; numeric routines stay infallible.
//! - "Not found" / "infeasible" is `None`, never a magic number.

pub mod bits;
pub mod cycle;
pub mod dp;
pub mod error;
pub mod gen;
pub mod sort;
pub mod strings;
pub mod tree;
pub mod two_pointer;

pub use error::{DrillError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bits::add_binary;
    pub use crate::cycle::circular_array_loop;
    pub use crate::dp::{grid_from_rows, min_falling_path, min_falling_path_sum};
    pub use crate::error::DrillError;
    pub use crate::gen::{GenCfg, ReplayToken};
    pub use crate::sort::{merge_sort, merge_sort_by, merge_sort_range, quick_sort, quick_sort_range};
    pub use crate::strings::rabin_karp::{search, search_with, HashCfg};
    pub use crate::strings::roman::{int_to_roman, roman_to_int, try_int_to_roman};
    pub use crate::strings::take_chars::take_characters;
    pub use crate::tree::{build_tree, inorder, postorder, preorder, TreeNode};
    pub use crate::two_pointer::{count_binary_substrings, max_score};
    pub use nalgebra::DMatrix;
}
