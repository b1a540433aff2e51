use super::check_range;
use crate::error::Result;

/// Unstable ascending sort.
///
/// Each range is partitioned around `v[0]` after the median of the first,
/// middle and last elements is swapped there. Elements equal to the pivot are
/// gathered next to it and not revisited. Only the smaller side recurses and
/// the larger side loops, so stack depth stays O(log n).
pub fn quick_sort<T: Ord>(mut v: &mut [T]) {
    while v.len() > 1 {
        median_to_front(v);
        let p = partition(v);
        let (lo, rest) = std::mem::take(&mut v).split_at_mut(p);
        let Some((pivot, hi)) = rest.split_first_mut() else {
            return;
        };
        let less = gather_below(lo, pivot);
        let lo = &mut lo[..less];
        if lo.len() < hi.len() {
            quick_sort(lo);
            v = hi;
        } else {
            quick_sort(hi);
            v = lo;
        }
    }
}

/// Sort only the inclusive range `v[start..=end]`.
pub fn quick_sort_range<T: Ord>(v: &mut [T], start: usize, end: usize) -> Result<()> {
    check_range(v.len(), start, end)?;
    quick_sort(&mut v[start..=end]);
    Ok(())
}

/// Partition around `v[0]` and return the pivot's final index.
///
/// Invariant: `v[0]` holds the pivot until the final swap, so the right scan
/// stops at index 0 at the latest. It must not be bounded by `left`: `right`
/// has to end on an element `<= pivot`.
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let (mut left, mut right) = (0, v.len() - 1);
    while left < right {
        while left < right && v[left] <= v[0] {
            left += 1;
        }
        while right > 0 && v[right] > v[0] {
            right -= 1;
        }
        if left < right {
            v.swap(left, right);
        }
    }
    v.swap(0, right);
    right
}

/// Swap the median of `v[0]`, `v[mid]`, `v[last]` into `v[0]`.
fn median_to_front<T: Ord>(v: &mut [T]) {
    if v.len() < 3 {
        return;
    }
    let (a, b, c) = (0, v.len() / 2, v.len() - 1);
    let m = if v[a] < v[b] {
        if v[b] < v[c] {
            b
        } else if v[a] < v[c] {
            c
        } else {
            a
        }
    } else if v[a] < v[c] {
        a
    } else if v[b] < v[c] {
        c
    } else {
        b
    };
    v.swap(0, m);
}

/// Move the elements of `lo` (all `<= pivot`) that are strictly below
/// `pivot` to the front; returns how many there are.
fn gather_below<T: Ord>(lo: &mut [T], pivot: &T) -> usize {
    let mut less = 0;
    for i in 0..lo.len() {
        if lo[i] < *pivot {
            lo.swap(i, less);
            less += 1;
        }
    }
    less
}

#[cfg(test)]
mod tests {
    use super::{gather_below, median_to_front, partition};

    #[test]
    fn partition_places_pivot() {
        let mut v = [4, 5, 1, 2, 4, 5, 6];
        let p = partition(&mut v);
        assert_eq!(p, 3);
        assert!(v[..p].iter().all(|&x| x <= 4));
        assert!(v[p + 1..].iter().all(|&x| x > 4));
    }

    #[test]
    fn partition_pivot_is_minimum() {
        // every other element exceeds the pivot: right scan runs down to 0
        let mut v = [1, 9, 8, 7];
        assert_eq!(partition(&mut v), 0);
        assert_eq!(v[0], 1);
    }

    #[test]
    fn median_of_three_moves_to_front() {
        let mut v = [1, 5, 9];
        median_to_front(&mut v);
        assert_eq!(v[0], 5);
        let mut w = [9, 1, 5, 7];
        median_to_front(&mut w);
        assert_eq!(w[0], 7);
        let mut e = [3, 3, 3];
        median_to_front(&mut e);
        assert_eq!(e, [3, 3, 3]);
    }

    #[test]
    fn equal_elements_are_gathered_behind() {
        let mut lo = [4, 1, 4, 2, 4, 3];
        let less = gather_below(&mut lo, &4);
        assert_eq!(less, 3);
        assert!(lo[..less].iter().all(|&x| x < 4));
        assert!(lo[less..].iter().all(|&x| x == 4));
    }
}
