//! Headerless integer CSV input, read through polars.

use std::path::Path;

use anyhow::{Context, Result};
use drills::dp::grid_from_rows;
use drills::prelude::DMatrix;
use polars::prelude::*;

/// Read every row of a headerless integer CSV. Empty cells are errors.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<i64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let columns = df
        .get_columns()
        .iter()
        .map(|s| -> PolarsResult<Vec<Option<i64>>> {
            let s = s.cast(&DataType::Int64)?;
            let ca = s.i64()?;
            Ok(ca.into_iter().collect())
        })
        .collect::<PolarsResult<Vec<_>>>()
        .with_context(|| format!("{}: expected integer cells", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "csv loaded");
    (0..df.height())
        .map(|r| {
            columns
                .iter()
                .enumerate()
                .map(|(c, col)| {
                    col[r].with_context(|| {
                        format!("{}: empty cell at row {}, column {}", path.display(), r + 1, c + 1)
                    })
                })
                .collect()
        })
        .collect()
}

/// All cells in row-major order.
pub fn flatten(rows: Vec<Vec<i64>>) -> Vec<i64> {
    rows.into_iter().flatten().collect()
}

pub fn narrow_i32(values: Vec<i64>) -> Result<Vec<i32>> {
    values
        .into_iter()
        .map(|v| i32::try_from(v).with_context(|| format!("{v} does not fit in i32")))
        .collect()
}

pub fn read_grid(path: &Path) -> Result<DMatrix<i64>> {
    Ok(grid_from_rows(&read_rows(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn grid_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        fs::write(&path, "1,2,10,4\n100,3,2,1\n1,1,20,2\n1,2,2,1\n").unwrap();
        let grid = read_grid(&path).unwrap();
        assert_eq!(grid.shape(), (4, 4));
        assert_eq!(grid[(1, 0)], 100);
        assert_eq!(drills::dp::min_falling_path_sum(&grid).unwrap(), 7);
    }

    #[test]
    fn single_column_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("values.csv");
        fs::write(&path, "5\n-3\n8\n").unwrap();
        let values = flatten(read_rows(&path).unwrap());
        assert_eq!(values, vec![5, -3, 8]);
        assert_eq!(narrow_i32(values).unwrap(), vec![5, -3, 8]);
        assert!(narrow_i32(vec![i64::from(i32::MAX) + 1]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_rows(&dir.path().join("absent.csv")).is_err());
    }
}
