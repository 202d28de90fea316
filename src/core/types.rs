use std::collections::BTreeMap;

pub type Color = u8;

/// Grid position as `(row, col)`. Tuples order by row, then column.
pub type Cell = (usize, usize);

/// Rows of color labels. Expected to be rectangular, see `validate_grid`.
pub type Grid = Vec<Vec<Color>>;

/// Cells per color, each list in row-major scan order.
pub type ColorGroups = BTreeMap<Color, Vec<Cell>>;
