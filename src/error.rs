use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The domain must span at least one unit.
    #[error("Invalid domain [{min_val}, {max_val}]: min_val must be less than max_val.")]
    InvalidDomain { min_val: i64, max_val: i64 },

    #[error("At least one query is required for non-overlapping generation.")]
    NoQueries,

    /// Every non-overlapping interval needs a width of at least one.
    #[error("Range too small for the number of non-overlapping queries requested.")]
    RangeTooSmall { total_range: u64, num_queries: usize },

    #[error("Malformed value {value:?} on line {line}")]
    Parse { line: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not create output directory: {0}")]
    Fs(#[from] fs_extra::error::Error),
}
