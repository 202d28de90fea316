use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Color, Grid, PatternError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcTask {
    pub id: String,
    pub train: Vec<ArcExample>,
    pub test: Vec<ArcExample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcExample {
    pub input: Grid,
    /// Empty for test samples published without an answer.
    #[serde(default)]
    pub output: Grid,
}

pub fn load_arc_task(path: &Path) -> anyhow::Result<ArcTask> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    let task = parse_task(id, &content).with_context(|| format!("parsing {}", path.display()))?;
    debug!("loaded task {} ({} train, {} test)", task.id, task.train.len(), task.test.len());
    Ok(task)
}

pub fn parse_task(id: &str, json: &str) -> anyhow::Result<ArcTask> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    let train = match raw.get("train") {
        Some(v) => parse_examples(v, true)?,
        None => return Err(PatternError::InvalidTask(format!("{}: no \"train\" samples", id)).into()),
    };
    let test = match raw.get("test") {
        Some(v) => parse_examples(v, false)?,
        None => Vec::new(),
    };
    Ok(ArcTask { id: id.to_string(), train, test })
}

fn parse_examples(val: &serde_json::Value, need_output: bool) -> Result<Vec<ArcExample>> {
    let arr = val
        .as_array()
        .ok_or_else(|| PatternError::InvalidTask("samples must be a list".into()))?;
    let mut out = Vec::with_capacity(arr.len());
    for ex in arr {
        let input = ex
            .get("input")
            .ok_or_else(|| PatternError::InvalidTask("sample without \"input\"".into()))?;
        let output = match ex.get("output") {
            Some(o) => parse_grid(o)?,
            None if need_output => {
                return Err(PatternError::InvalidTask("sample without \"output\"".into()));
            }
            None => Grid::new(),
        };
        out.push(ArcExample { input: parse_grid(input)?, output });
    }
    Ok(out)
}

fn parse_grid(val: &serde_json::Value) -> Result<Grid> {
    let bad = || PatternError::InvalidTask(format!("not a grid of colors: {}", val));
    let rows = val.as_array().ok_or_else(bad)?;
    rows.iter()
        .map(|row| -> Result<Vec<Color>> {
            row.as_array()
                .ok_or_else(bad)?
                .iter()
                .map(|c| c.as_u64().and_then(|n| Color::try_from(n).ok()).ok_or_else(bad))
                .collect()
        })
        .collect()
}

/// `.json` files directly under `dir`, sorted by file name.
pub fn task_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read ARC data dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    files.sort();
    Ok(files)
}

/// Load the given task files in order. Files that fail to load are logged
/// and skipped; the second value counts them.
pub fn load_tasks(paths: &[PathBuf]) -> (Vec<ArcTask>, usize) {
    let mut tasks = Vec::with_capacity(paths.len());
    let mut skipped = 0;
    for path in paths {
        match load_arc_task(path) {
            Ok(t) => tasks.push(t),
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                skipped += 1;
            }
        }
    }
    (tasks, skipped)
}

/// `(rows, cols)`, taking the column count from the first row.
pub fn grid_dimensions(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() { return (0, 0); }
    (grid.len(), grid[0].len())
}

pub fn unique_colors(grid: &Grid) -> Vec<Color> {
    let mut seen = [false; 256];
    for row in grid {
        for &c in row {
            seen[c as usize] = true;
        }
    }
    (0..=255u8).filter(|&c| seen[c as usize]).collect()
}

/// Fails with `MalformedGrid` on the first row whose length differs from row 0.
pub fn validate_grid(grid: &Grid) -> Result<()> {
    let Some(first) = grid.first() else { return Ok(()) };
    let expected = first.len();
    match grid.iter().position(|row| row.len() != expected) {
        Some(row) => Err(PatternError::MalformedGrid { row, expected, found: grid[row].len() }),
        None => Ok(()),
    }
}
