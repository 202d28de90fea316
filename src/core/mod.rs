pub mod error;
pub mod types;

pub use error::{PatternError, Result};
pub use types::{Cell, Color, ColorGroups, Grid};
