//! Minimum falling path sum over a rectangular grid.
//!
//! Purpose
//! - Pick one cell per row, each within one column of the previous pick, and
//!   minimise the total. Bottom-up tabulation, O(rows · cols) time and space.
//!
//! Model
//! - `cost[(0, j)] = grid[(0, j)]`.
//! - `cost[(i, j)] = grid[(i, j)] + min over the in-range cells of
//!   `cost[(i-1, j-1..=j+1)]`. A diagonal outside the grid never wins, which is
//!   the same as giving it an unbounded cost.
//!
//! The grid is an `nalgebra::DMatrix<i64>` so rectangularity is a type property;
//! `grid_from_rows` converts nested rows and rejects ragged input. A partial
//! sum that leaves `i64` is reported as `DrillError::OutOfRange`.

use nalgebra::DMatrix;

use crate::error::{DrillError, Result};

/// Optimal sum together with the chosen column in every row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallingPath {
    pub sum: i64,
    pub columns: Vec<usize>,
}

/// Build a grid from row-major nested vectors.
pub fn grid_from_rows(rows: &[Vec<i64>]) -> Result<DMatrix<i64>> {
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(DrillError::invalid(format!(
            "row {i} has {} columns, expected {ncols}",
            row.len()
        )));
    }
    Ok(DMatrix::from_row_iterator(
        rows.len(),
        ncols,
        rows.iter().flatten().copied(),
    ))
}

/// Minimum falling path sum.
pub fn min_falling_path_sum(grid: &DMatrix<i64>) -> Result<i64> {
    let cost = tabulate(grid)?;
    let last = cost.nrows() - 1;
    cost.row(last)
        .iter()
        .copied()
        .min()
        .ok_or_else(|| DrillError::invalid("grid has no columns"))
}

/// Minimum falling path sum plus one optimal column choice per row.
pub fn min_falling_path(grid: &DMatrix<i64>) -> Result<FallingPath> {
    let cost = tabulate(grid)?;
    let (m, n) = cost.shape();
    let mut col = (0..n)
        .min_by_key(|&j| cost[(m - 1, j)])
        .ok_or_else(|| DrillError::invalid("grid has no columns"))?;
    let sum = cost[(m - 1, col)];
    let mut columns = vec![col; m];
    for i in (1..m).rev() {
        col = best_parent(&cost, i, col).0;
        columns[i - 1] = col;
    }
    Ok(FallingPath { sum, columns })
}

fn tabulate(grid: &DMatrix<i64>) -> Result<DMatrix<i64>> {
    let (m, n) = grid.shape();
    if m == 0 || n == 0 {
        return Err(DrillError::invalid(format!("empty grid ({m}x{n})")));
    }
    let mut cost = grid.clone();
    for i in 1..m {
        for j in 0..n {
            cost[(i, j)] = add_cost(grid[(i, j)], best_parent(&cost, i, j).1)?;
        }
    }
    Ok(cost)
}

/// `cell + parent`, or `OutOfRange` naming the interval `cell` must lie in
/// for the sum to fit in `i64`.
fn add_cost(cell: i64, parent: i64) -> Result<i64> {
    cell.checked_add(parent).ok_or_else(|| {
        let (min, max) = if parent >= 0 {
            (i64::MIN, i64::MAX - parent)
        } else {
            (i64::MIN - parent, i64::MAX)
        };
        DrillError::out_of_range(cell, min, max)
    })
}

/// Cheapest of `cost[(i-1, j-1..=j+1)]` that lies inside the grid; ties keep `j`.
fn best_parent(cost: &DMatrix<i64>, i: usize, j: usize) -> (usize, i64) {
    let n = cost.ncols();
    let mut best = (j, cost[(i - 1, j)]);
    // j - 1 wraps to usize::MAX at the left edge and fails the bound check
    for c in [j.wrapping_sub(1), j + 1] {
        if c < n && cost[(i - 1, c)] < best.1 {
            best = (c, cost[(i - 1, c)]);
        }
    }
    best
}
