use std::cmp::Ordering;

use super::check_range;
use crate::error::Result;

/// Stable ascending sort.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, |a, b| a.cmp(b));
}

/// Stable sort with a caller-supplied comparator. Ties keep input order.
pub fn merge_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        let high = v.len() - 1;
        sort_range(v, 0, high, &mut cmp);
    }
}

/// Sort only the inclusive range `v[low..=high]`; elements outside it are untouched.
pub fn merge_sort_range<T: Ord + Clone>(v: &mut [T], low: usize, high: usize) -> Result<()> {
    check_range(v.len(), low, high)?;
    sort_range(v, low, high, &mut |a: &T, b: &T| a.cmp(b));
    Ok(())
}

fn sort_range<T, F>(v: &mut [T], low: usize, high: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if low < high {
        let mid = low + (high - low) / 2;
        sort_range(v, low, mid, cmp);
        sort_range(v, mid + 1, high, cmp);
        merge(v, low, mid, high, cmp);
    }
}

/// Merge the sorted runs `v[low..=mid]` and `v[mid+1..=high]`.
fn merge<T, F>(v: &mut [T], low: usize, mid: usize, high: usize, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = v[low..=mid].to_vec();
    let right = v[mid + 1..=high].to_vec();
    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        // left wins ties
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            v[k] = left[i].clone();
            i += 1;
        } else {
            v[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    for x in left[i..].iter().chain(right[j..].iter()) {
        v[k] = x.clone();
        k += 1;
    }
}
