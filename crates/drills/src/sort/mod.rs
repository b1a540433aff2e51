//! In-place comparison sorts.
//!
//! Purpose
//! - `merge`: top-down merge sort, stable, O(n) scratch per merge.
//! - `quick`: quicksort partitioning around `v[0]` (median of three moved
//!   there first), unstable, no scratch, O(log n) stack.
//!
//! Both accept whole slices and inclusive `[low, high]` ranges; the range
//! variants validate bounds and return `DrillError::OutOfRange`.

mod merge;
mod quick;

pub use merge::{merge_sort, merge_sort_by, merge_sort_range};
pub use quick::{quick_sort, quick_sort_range};

use crate::error::{DrillError, Result};

/// Check an inclusive `[low, high]` range against a slice of length `len`.
pub(crate) fn check_range(len: usize, low: usize, high: usize) -> Result<()> {
    if len == 0 || high >= len {
        return Err(DrillError::out_of_range(
            high as i64,
            0,
            len as i64 - 1,
        ));
    }
    if low > high {
        return Err(DrillError::invalid(format!(
            "range start {low} exceeds end {high}"
        )));
    }
    Ok(())
}
