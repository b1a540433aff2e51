//! CSV-driven batch jobs: run one algorithm, write its JSON result, and a
//! provenance sidecar next to it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use drills::prelude::*;
use drills::tree::ABSENT;
use serde::Serialize;
use serde_json::{json, Value};

use crate::input;
use crate::provenance::{InputShape, Sidecar};

/// Algorithms that take a CSV input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algo {
    /// One integer per cell, sorted row-major
    MergeSort,
    QuickSort,
    /// Rectangular integer grid
    FallingPath,
    /// Jump values, row-major
    CircularLoop,
    /// Level-order values with -1 for absent nodes
    Tree,
}

impl Algo {
    fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_else(|| format!("{self:?}"))
    }
}

/// Result of one job plus the shape of the CSV it read.
#[derive(Debug)]
pub struct Evaluation {
    pub result: Value,
    pub shape: InputShape,
}

pub fn evaluate(algo: Algo, input: &Path) -> Result<Evaluation> {
    let rows = input::read_rows(input)?;
    let shape = InputShape::of(&rows);
    let result = match algo {
        Algo::MergeSort | Algo::QuickSort => {
            let mut values = input::flatten(rows);
            if algo == Algo::MergeSort {
                merge_sort(&mut values);
            } else {
                quick_sort(&mut values);
            }
            json!({ "sorted": values })
        }
        Algo::FallingPath => {
            let path = min_falling_path(&grid_from_rows(&rows)?)?;
            json!({ "sum": path.sum, "columns": path.columns })
        }
        Algo::CircularLoop => {
            let jumps = input::narrow_i32(input::flatten(rows))?;
            json!({ "has_loop": circular_array_loop(&jumps) })
        }
        Algo::Tree => {
            let values = input::narrow_i32(input::flatten(rows))?;
            let root = build_tree(&values, ABSENT);
            let r = root.as_deref();
            json!({
                "inorder": inorder(r),
                "preorder": preorder(r),
                "postorder": postorder(r),
            })
        }
    };
    Ok(Evaluation { result, shape })
}

/// Run `algo` on `input`, write the result to `out`, and return the sidecar path.
pub fn run(algo: Algo, input: &Path, out: &Path) -> Result<PathBuf> {
    tracing::info!(algo = ?algo, input = %input.display(), out = %out.display(), "run");
    let Evaluation { result, shape } = evaluate(algo, input)?;
    tracing::info!(rows = shape.rows, cols = shape.cols, "input shape");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = Sidecar::new(&algo.name(), input, shape, out).write()?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(sidecar)
}
