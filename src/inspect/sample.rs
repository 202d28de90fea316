use std::fmt::Write;
use std::time::Instant;

use log::warn;

use crate::core::Color;
use crate::perception::grid::{grid_dimensions, unique_colors, validate_grid, ArcExample, ArcTask};
use crate::perception::patterns::{discover_patterns, group_by_color};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task_id: String,
    pub samples: usize,
    pub patterns: usize,
    pub colors: usize,
    pub largest_pattern: usize,
    /// `(rows, cols)` of each training input.
    pub sizes: Vec<(usize, usize)>,
    /// Colors used anywhere in the training samples.
    pub palette: Vec<Color>,
    pub rendered: Vec<String>,
    pub elapsed_ms: u64,
}

/// Patterns per color of the sample input, followed by the raw input and
/// output grids.
pub fn render_sample(sample: &ArcExample, count_diagonal: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    for (color, cells) in group_by_color(&sample.input) {
        let _ = writeln!(out, "{} : {:?}", color, discover_patterns(&cells, count_diagonal));
    }
    for row in &sample.input {
        let _ = writeln!(out, "{:?}", row);
    }
    out.push('\n');
    for row in &sample.output {
        let _ = writeln!(out, "{:?}", row);
    }
    out.push_str("\n\n");
    out
}

pub fn inspect_task(task: &ArcTask, count_diagonal: bool) -> TaskReport {
    let start = Instant::now();
    let mut patterns = 0;
    let mut colors = 0;
    let mut largest_pattern = 0;
    let mut sizes = Vec::with_capacity(task.train.len());
    let mut palette = Vec::new();
    let mut rendered = Vec::with_capacity(task.train.len());

    for (i, sample) in task.train.iter().enumerate() {
        if let Err(e) = validate_grid(&sample.input) {
            warn!("task {} sample {}: {}", task.id, i, e);
        }
        sizes.push(grid_dimensions(&sample.input));
        palette.extend(unique_colors(&sample.input));
        palette.extend(unique_colors(&sample.output));
        let groups = group_by_color(&sample.input);
        colors = colors.max(groups.len());
        for cells in groups.values() {
            for p in discover_patterns(cells, count_diagonal) {
                patterns += 1;
                largest_pattern = largest_pattern.max(p.len());
            }
        }
        rendered.push(render_sample(sample, count_diagonal));
    }
    palette.sort_unstable();
    palette.dedup();

    TaskReport {
        task_id: task.id.clone(),
        samples: task.train.len(),
        patterns,
        colors,
        largest_pattern,
        sizes,
        palette,
        rendered,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
