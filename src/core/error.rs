use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    EmptyInput,
    MalformedGrid { row: usize, expected: usize, found: usize },
    InvalidTask(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty cell set"),
            Self::MalformedGrid { row, expected, found } => write!(
                f,
                "malformed grid: row {} has {} cells, expected {}",
                row, found, expected
            ),
            Self::InvalidTask(msg) => write!(f, "invalid task: {}", msg),
        }
    }
}

impl std::error::Error for PatternError {}

pub type Result<T> = std::result::Result<T, PatternError>;
