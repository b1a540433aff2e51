//! `<stem>.provenance.json` sidecars recording how a `run` output was made.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Rows and columns of the CSV a job read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputShape {
    pub rows: usize,
    pub cols: usize,
}

impl InputShape {
    pub fn of(rows: &[Vec<i64>]) -> Self {
        Self {
            rows: rows.len(),
            cols: rows.first().map_or(0, Vec::len),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub drills_version: &'static str,
    /// `file:line` of the code that produced the output.
    pub callsite: String,
    pub algo: String,
    pub input: String,
    pub input_shape: InputShape,
    pub output: String,
}

impl Sidecar {
    #[track_caller]
    pub fn new(algo: &str, input: &Path, input_shape: InputShape, output: &Path) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: current_git_rev(),
            drills_version: drills::VERSION,
            callsite: format!("{}:{}", caller.file(), caller.line()),
            algo: algo.to_string(),
            input: input.to_string_lossy().into_owned(),
            input_shape,
            output: output.to_string_lossy().into_owned(),
        }
    }

    /// Write next to the output and return the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.output));
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/sorted.json` -> `out/sorted.provenance.json`.
fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

/// `GIT_COMMIT` at runtime, then at build time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| option_env!("GIT_COMMIT").filter(|rev| !rev.is_empty()).map(String::from))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
