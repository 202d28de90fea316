// Connected-pattern discovery over color groups.
//
// A grid is first split into color groups (every cell of one color), then
// each group is partitioned into maximal clusters of adjacent cells.
// Adjacency is either 4-connected (shared edge) or 8-connected (shared edge
// or corner), chosen by the `count_diagonal` flag.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, ColorGroups, Grid, PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub cells: Vec<Cell>,
    pub color: Color,
    pub min_r: usize,
    pub min_c: usize,
    pub max_r: usize,
    pub max_c: usize,
}

impl Pattern {
    pub fn from_cells(cells: Vec<Cell>, color: Color) -> Result<Self> {
        let (min_r, min_c, max_r, max_c) = bounds(&cells)?;
        Ok(Self { cells, color, min_r, min_c, max_r, max_c })
    }

    pub fn width(&self) -> usize { self.max_c - self.min_c + 1 }
    pub fn height(&self) -> usize { self.max_r - self.min_r + 1 }
    pub fn area(&self) -> usize { self.cells.len() }

    /// `(min_r, min_c, height, width)`
    pub fn bounding_box(&self) -> (usize, usize, usize, usize) {
        (self.min_r, self.min_c, self.height(), self.width())
    }

    /// The pattern cropped to its bounding box, background 0.
    pub fn to_grid(&self) -> Grid {
        let mut g = vec![vec![0u8; self.width()]; self.height()];
        for &(r, c) in &self.cells {
            g[r - self.min_r][c - self.min_c] = self.color;
        }
        g
    }
}

fn bounds(cells: &[Cell]) -> Result<(usize, usize, usize, usize)> {
    let (&(r0, c0), rest) = cells.split_first().ok_or(PatternError::EmptyInput)?;
    Ok(rest.iter().fold((r0, c0, r0, c0), |(min_r, min_c, max_r, max_c), &(r, c)| {
        (min_r.min(r), min_c.min(c), max_r.max(r), max_c.max(c))
    }))
}

/// Width and height of the smallest rectangle enclosing `cells`.
pub fn rectangular_size(cells: &[Cell]) -> Result<(usize, usize)> {
    let (min_r, min_c, max_r, max_c) = bounds(cells)?;
    Ok((max_c - min_c + 1, max_r - min_r + 1))
}

pub fn group_by_color(grid: &Grid) -> ColorGroups {
    let mut colors = ColorGroups::new();
    for (r, row) in grid.iter().enumerate() {
        for (c, &color) in row.iter().enumerate() {
            colors.entry(color).or_default().push((r, c));
        }
    }
    colors
}

/// Partition `cells` into maximal adjacency-connected patterns.
///
/// Seeds are taken in input order, so the output is deterministic for a
/// given input ordering. Repeated cells are counted once.
pub fn discover_patterns(cells: &[Cell], count_diagonal: bool) -> Vec<Vec<Cell>> {
    let mut unvisited: FxHashSet<Cell> = cells.iter().copied().collect();
    let mut patterns = Vec::new();
    let mut queue = VecDeque::new();

    for &seed in cells {
        if !unvisited.remove(&seed) { continue; }
        let mut pattern = vec![seed];
        queue.push_back(seed);

        while let Some((r, c)) = queue.pop_front() {
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    if dr == 0 && dc == 0 { continue; }
                    if !count_diagonal && dr != 0 && dc != 0 { continue; }
                    let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                        continue;
                    };
                    if unvisited.remove(&(nr, nc)) {
                        pattern.push((nr, nc));
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
        patterns.push(pattern);
    }
    patterns
}

/// All patterns of a grid, ordered by color and then by discovery order.
pub fn grid_patterns(grid: &Grid, count_diagonal: bool) -> Result<Vec<Pattern>> {
    let mut out = Vec::new();
    for (color, cells) in group_by_color(grid) {
        for cells in discover_patterns(&cells, count_diagonal) {
            out.push(Pattern::from_cells(cells, color)?);
        }
    }
    Ok(out)
}

/// True when the image bounding box is a whole multiple of the pattern
/// bounding box in both directions.
pub fn is_splittable(image: &[Cell], pattern: &[Cell]) -> Result<bool> {
    let (image_w, image_h) = rectangular_size(image)?;
    let (pattern_w, pattern_h) = rectangular_size(pattern)?;
    Ok(image_w % pattern_w == 0 && image_h % pattern_h == 0)
}

/// True when the image is exactly the pattern repeated on a grid of
/// pattern-sized blocks covering the image bounding box.
pub fn tiles_by_translation(image: &[Cell], pattern: &[Cell]) -> Result<bool> {
    if !is_splittable(image, pattern)? {
        return Ok(false);
    }
    let (img_r, img_c, _, _) = bounds(image)?;
    let (pat_r, pat_c, _, _) = bounds(pattern)?;
    let (image_w, image_h) = rectangular_size(image)?;
    let (pattern_w, pattern_h) = rectangular_size(pattern)?;

    let image_set: FxHashSet<Cell> = image.iter().copied().collect();
    let shape: FxHashSet<Cell> = pattern.iter().map(|&(r, c)| (r - pat_r, c - pat_c)).collect();

    for block_r in (0..image_h).step_by(pattern_h) {
        for block_c in (0..image_w).step_by(pattern_w) {
            for dr in 0..pattern_h {
                for dc in 0..pattern_w {
                    let present = image_set.contains(&(img_r + block_r + dr, img_c + block_c + dc));
                    if present != shape.contains(&(dr, dc)) {
                        return Ok(false);
                    }
                }
            }
        }
    }
    Ok(true)
}
