use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use drills::gen::{self_check, GenCfg};
use drills::prelude::*;
use drills::tree::{render, ABSENT};
use serde::Serialize;
use serde_json::{json, Value};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod jobs;
mod provenance;

#[derive(Parser)]
#[command(name = "drills-cli")]
#[command(about = "Run the algorithm drills on ad-hoc or CSV input")]
struct Cmd {
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum SortAlgo {
    Merge,
    Quick,
}

#[derive(Subcommand)]
enum Action {
    /// Sort integers ascending
    Sort {
        #[arg(long, value_enum, default_value_t = SortAlgo::Merge)]
        algo: SortAlgo,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Integer to Roman numeral
    ToRoman {
        num: u32,
        /// Reject values outside 1..=3999
        #[arg(long)]
        strict: bool,
    },
    /// Roman numeral to integer
    FromRoman { numeral: String },
    /// Rabin–Karp: all offsets of PATTERN in TEXT
    Search {
        pattern: String,
        text: String,
        #[arg(long, default_value_t = 7)]
        base: u64,
        #[arg(long, default_value_t = 101)]
        modulus: u64,
    },
    /// Add two binary strings
    AddBinary { a: String, b: String },
    /// Count grouped equal-run binary substrings
    CountBs { s: String },
    /// Best zeros-left plus ones-right split score
    MaxScore { s: String },
    /// Fewest chars taken from both ends to get K of each of a, b, c (-1 if impossible)
    TakeChars { s: String, k: usize },
    /// Detect a single-direction cycle in a circular jump array
    CircularLoop {
        #[arg(required = true, allow_negative_numbers = true)]
        jumps: Vec<i32>,
    },
    /// Minimum falling path sum over a headerless integer CSV grid
    FallingPath {
        #[arg(long)]
        input: PathBuf,
    },
    /// Build a tree from level-order values and print in/pre/post-order
    Tree {
        /// Value marking an absent node
        #[arg(long, default_value_t = ABSENT, allow_negative_numbers = true)]
        sentinel: i32,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Run an algorithm on a CSV input; write JSON output plus a provenance sidecar
    Run {
        #[arg(long, value_enum)]
        algo: jobs::Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Cross-check the drills against reference implementations on seeded input
    SelfCheck {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 32)]
        len: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

struct Output {
    json: bool,
}

impl Output {
    fn emit(&self, text: impl Display, value: Value) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{text}");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let out = Output { json: cmd.json };
    dispatch(cmd.action, &out)
}

fn dispatch(action: Action, out: &Output) -> Result<()> {
    match action {
        Action::Sort { algo, mut values } => {
            match algo {
                SortAlgo::Merge => merge_sort(&mut values),
                SortAlgo::Quick => quick_sort(&mut values),
            }
            tracing::info!(algo = ?algo, n = values.len(), "sort");
            out.emit(
                format!("{values:?}"),
                json!({ "algo": algo, "sorted": values }),
            )
        }
        Action::ToRoman { num, strict } => {
            let roman = if strict {
                try_int_to_roman(num)?
            } else {
                int_to_roman(num)
            };
            out.emit(&roman, json!({ "num": num, "roman": roman }))
        }
        Action::FromRoman { numeral } => {
            let num = roman_to_int(&numeral)?;
            out.emit(num, json!({ "roman": numeral, "num": num }))
        }
        Action::Search {
            pattern,
            text,
            base,
            modulus,
        } => {
            let cfg = HashCfg { base, modulus };
            let hits: Vec<usize> = search_with(&pattern, &text, cfg).collect();
            out.emit(
                format!("{hits:?}"),
                json!({ "pattern": pattern, "offsets": hits }),
            )
        }
        Action::AddBinary { a, b } => {
            let sum = add_binary(&a, &b)?;
            out.emit(&sum, json!({ "a": a, "b": b, "sum": sum }))
        }
        Action::CountBs { s } => {
            let count = count_binary_substrings(&s)?;
            out.emit(count, json!({ "s": s, "count": count }))
        }
        Action::MaxScore { s } => {
            let score = max_score(&s)?;
            out.emit(score, json!({ "s": s, "score": score }))
        }
        Action::TakeChars { s, k } => {
            let taken = take_characters(&s, k)?.map_or(-1, |n| n as i64);
            out.emit(taken, json!({ "s": s, "k": k, "taken": taken }))
        }
        Action::CircularLoop { jumps } => {
            let found = circular_array_loop(&jumps);
            out.emit(found, json!({ "jumps": jumps, "has_loop": found }))
        }
        Action::FallingPath { input } => {
            let grid = input::read_grid(&input)?;
            let path = min_falling_path(&grid)?;
            tracing::info!(rows = grid.nrows(), cols = grid.ncols(), sum = path.sum, "falling path");
            out.emit(
                path.sum,
                json!({ "sum": path.sum, "columns": path.columns }),
            )
        }
        Action::Tree { sentinel, values } => {
            let root = build_tree(&values, sentinel);
            let r = root.as_deref();
            let (ino, pre, post) = (inorder(r), preorder(r), postorder(r));
            out.emit(
                format!("{}\n{}\n{}", render(&ino), render(&pre), render(&post)),
                json!({ "inorder": ino, "preorder": pre, "postorder": post }),
            )
        }
        Action::Run { algo, input, out: path } => {
            let sidecar = jobs::run(algo, &input, &path)?;
            out.emit(
                path.display(),
                json!({ "output": path, "provenance": sidecar }),
            )
        }
        Action::SelfCheck { seed, count, len } => {
            let cfg = GenCfg {
                len,
                ..GenCfg::default()
            };
            let report = self_check(seed, count, cfg);
            tracing::info!(seed, draws = report.draws, checks = report.checks, "self-check");
            let failed: Vec<Value> = report
                .mismatches
                .iter()
                .map(|m| json!({ "check": m.check, "seed": m.token.seed, "index": m.token.index }))
                .collect();
            out.emit(
                format!("{} checks over {} draws, {} mismatches", report.checks, report.draws, failed.len()),
                json!({ "draws": report.draws, "checks": report.checks, "mismatches": failed }),
            )?;
            if !report.passed() {
                bail!("self-check found {} mismatches", report.mismatches.len());
            }
            Ok(())
        }
        Action::Report => {
            let obj = json!({
                "code_rev": provenance::current_git_rev(),
                "drills_version": drills::VERSION,
                "algos": jobs::Algo::value_variants()
                    .iter()
                    .filter_map(|a| a.to_possible_value())
                    .map(|v| v.get_name().to_string())
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
            Ok(())
        }
    }
}
