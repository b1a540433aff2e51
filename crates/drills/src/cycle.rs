//! Single-direction cycles in a circular jump array.
//!
//! `jumps[i]` moves `|jumps[i]|` slots forward (positive) or backward
//! (negative), wrapping around. A qualifying cycle has length > 1 and never
//! changes direction.

/// Floyd's tortoise and hare from every start, O(n²) worst case.
///
/// A move that reverses direction or lands on its own index ends the walk
/// for that start.
pub fn circular_array_loop(jumps: &[i32]) -> bool {
    (0..jumps.len()).any(|start| {
        let forward = jumps[start] >= 0;
        let (mut slow, mut fast) = (start, start);
        loop {
            let next_slow = next_index(jumps, forward, slow);
            let next_fast =
                next_index(jumps, forward, fast).and_then(|f| next_index(jumps, forward, f));
            match (next_slow, next_fast) {
                (Some(s), Some(f)) if s == f => return true,
                (Some(s), Some(f)) => {
                    slow = s;
                    fast = f;
                }
                _ => return false,
            }
        }
    })
}

fn next_index(jumps: &[i32], forward: bool, i: usize) -> Option<usize> {
    let step = jumps[i];
    if (step >= 0) != forward {
        return None;
    }
    let n = jumps.len() as i64;
    let next = (i as i64 + i64::from(step)).rem_euclid(n) as usize;
    (next != i).then_some(next)
}
